mod block;
mod engine;
mod error;
mod types;

pub mod cbc;

pub use fipsdemo_core::ComplianceMode;

pub use self::block::BlockTransform;
pub use self::engine::CipherEngine;
pub use self::error::{CipherError, CipherResult, LengthError};
pub use self::types::{CipherAlgorithm, CipherMode};

/**
    Single-block transforms shipped with the engine.
*/
pub mod transforms {
    pub use aes::{Aes128, Aes256};
    pub use des::TdesEde3;
}
