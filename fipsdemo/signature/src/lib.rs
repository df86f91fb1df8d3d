#![allow(clippy::doc_overindented_list_items)]

mod algorithm;
mod constants;
mod error;
mod hasher;
mod key;
mod verify;

pub mod pkcs1;

pub use fipsdemo_core::ComplianceMode;

pub use self::algorithm::DigestAlgorithm;
pub use self::constants::FIPS_MIN_MODULUS_BITS;
pub use self::error::{SignatureError, SignatureResult};
pub use self::hasher::{Hasher, digest, digest_by_name};
pub use self::key::PublicKey;
pub use self::verify::{DigestVerifier, verify, verify_by_name, verify_strict};
