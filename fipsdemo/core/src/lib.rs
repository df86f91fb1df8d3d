mod compliance;
mod error;

pub mod io;
pub mod utils;

pub use self::compliance::ComplianceMode;
pub use self::error::{InputError, ParseError};
pub use self::io::{MAX_INPUT_LEN, read_bounded, read_file};
pub use self::utils::{ct_eq, eq_ignore_ascii_case};
