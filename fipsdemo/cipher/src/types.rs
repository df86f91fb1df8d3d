use core::fmt;
use core::str::FromStr;

use fipsdemo_core::{ParseError, eq_ignore_ascii_case};

/**
    Block cipher mode of operation.

    All common modes are recognized so that a request for one of them can be
    rejected by name. The engine itself only implements [`CipherMode::Cbc`].
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Cbc,
    Ecb,
    Cfb,
    Ofb,
    Ctr,
}

impl CipherMode {
    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = name.trim_ascii();
        if name.len() != 3 {
            return None;
        }
        if eq_ignore_ascii_case(name, b"cbc") {
            Some(Self::Cbc)
        } else if eq_ignore_ascii_case(name, b"ecb") {
            Some(Self::Ecb)
        } else if eq_ignore_ascii_case(name, b"cfb") {
            Some(Self::Cfb)
        } else if eq_ignore_ascii_case(name, b"ofb") {
            Some(Self::Ofb)
        } else if eq_ignore_ascii_case(name, b"ctr") {
            Some(Self::Ctr)
        } else {
            None
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Cbc => "CBC",
            Self::Ecb => "ECB",
            Self::Cfb => "CFB",
            Self::Ofb => "OFB",
            Self::Ctr => "CTR",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for CipherMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "cipher mode",
            value: s.to_owned(),
        })
    }
}

/**
    Block cipher driven by the CBC engine.

    `TripleDes` is three-key DES-EDE3 (24-byte key, 8-byte block).
    The AES variants use a 16-byte block.
*/
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    #[default]
    TripleDes,
    Aes128,
    Aes256,
}

impl CipherAlgorithm {
    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = name.trim_ascii();
        match name.len() {
            4 if eq_ignore_ascii_case(name, b"tdes") => Some(Self::TripleDes),
            4 if eq_ignore_ascii_case(name, b"3des") => Some(Self::TripleDes),
            8 if eq_ignore_ascii_case(name, b"des-ede3") => Some(Self::TripleDes),
            6 if eq_ignore_ascii_case(name, b"aes128") => Some(Self::Aes128),
            7 if eq_ignore_ascii_case(name, b"aes-128") => Some(Self::Aes128),
            6 if eq_ignore_ascii_case(name, b"aes256") => Some(Self::Aes256),
            7 if eq_ignore_ascii_case(name, b"aes-256") => Some(Self::Aes256),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::TripleDes => "DES-EDE3",
            Self::Aes128 => "AES-128",
            Self::Aes256 => "AES-256",
        }
    }

    pub const fn block_size(self) -> usize {
        match self {
            Self::TripleDes => 8,
            Self::Aes128 | Self::Aes256 => 16,
        }
    }

    pub const fn key_len(self) -> usize {
        match self {
            Self::TripleDes => 24,
            Self::Aes128 => 16,
            Self::Aes256 => 32,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "cipher algorithm",
            value: s.to_owned(),
        })
    }
}
