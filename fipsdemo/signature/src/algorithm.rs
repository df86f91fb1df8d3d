use core::fmt;
use core::str::FromStr;

use fipsdemo_core::{ParseError, eq_ignore_ascii_case};

use crate::constants::*;

/**
    Message digest used before PKCS#1 v1.5 signing or verification.

    `NoHash` is the passthrough variant: the "digest" is the message itself
    and it is encoded without a `DigestInfo` wrapper, for callers that hash
    out of band or sign raw data.
*/
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    NoHash,
}

impl DigestAlgorithm {
    pub const ALL: [Self; 7] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::NoHash,
    ];

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = name.trim_ascii();
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"md5") => Some(Self::Md5),
            4 if eq_ignore_ascii_case(name, b"sha1") => Some(Self::Sha1),
            5 if eq_ignore_ascii_case(name, b"sha-1") => Some(Self::Sha1),
            6 if eq_ignore_ascii_case(name, b"sha224") => Some(Self::Sha224),
            6 if eq_ignore_ascii_case(name, b"sha256") => Some(Self::Sha256),
            6 if eq_ignore_ascii_case(name, b"sha384") => Some(Self::Sha384),
            6 if eq_ignore_ascii_case(name, b"sha512") => Some(Self::Sha512),
            6 if eq_ignore_ascii_case(name, b"nohash") => Some(Self::NoHash),
            7 if eq_ignore_ascii_case(name, b"sha-224") => Some(Self::Sha224),
            7 if eq_ignore_ascii_case(name, b"sha-256") => Some(Self::Sha256),
            7 if eq_ignore_ascii_case(name, b"sha-384") => Some(Self::Sha384),
            7 if eq_ignore_ascii_case(name, b"sha-512") => Some(Self::Sha512),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::NoHash => "nohash",
        }
    }

    /**
        Fixed digest length in bytes, or `None` for the passthrough variant.
    */
    pub const fn output_len(self) -> Option<usize> {
        match self {
            Self::Md5 => Some(16),
            Self::Sha1 => Some(20),
            Self::Sha224 => Some(28),
            Self::Sha256 => Some(32),
            Self::Sha384 => Some(48),
            Self::Sha512 => Some(64),
            Self::NoHash => None,
        }
    }

    /**
        DER `DigestInfo` bytes that precede the digest in the encoded block.
        Empty for the passthrough variant.
    */
    pub const fn digest_info_prefix(self) -> &'static [u8] {
        match self {
            Self::Md5 => &MD5_PREFIX,
            Self::Sha1 => &SHA1_PREFIX,
            Self::Sha224 => &SHA224_PREFIX,
            Self::Sha256 => &SHA256_PREFIX,
            Self::Sha384 => &SHA384_PREFIX,
            Self::Sha512 => &SHA512_PREFIX,
            Self::NoHash => &[],
        }
    }

    /**
        Whether the algorithm may be used for signature verification in
        FIPS mode.
    */
    pub const fn is_fips_approved(self) -> bool {
        !matches!(self, Self::Md5)
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "digest algorithm",
            value: s.to_owned(),
        })
    }
}
