mod crypt;
mod digest;
mod encdec;
mod verify;

use std::ops::Deref;
use std::str::FromStr;

pub use self::crypt::{DecryptCommand, EncryptCommand};
pub use self::digest::DigestCommand;
pub use self::encdec::EncDecCommand;
pub use self::verify::VerifyCommand;

/**
    Byte string given on the command line as hex.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(Vec<u8>);

impl FromStr for HexBytes {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s.trim()).map(Self)
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}
