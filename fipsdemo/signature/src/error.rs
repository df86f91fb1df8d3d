use thiserror::Error;

use crate::algorithm::DigestAlgorithm;

/**
    Errors from digesting and PKCS#1 v1.5 signature verification.

    A signature that simply does not match is not an error for [`verify`],
    which returns `Ok(false)`. [`SignatureError::VerificationFailed`] is only
    produced by the `verify_strict` variants.

    [`verify`]: crate::verify
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    // ── Algorithm selection ───────────────────────────────────────────
    #[error("unknown digest algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("{0} is not approved in FIPS mode")]
    NotApproved(DigestAlgorithm),

    // ── Lengths ───────────────────────────────────────────────────────
    #[error("{algorithm} digest must be {expected} bytes, got {actual}")]
    InvalidDigestLength {
        algorithm: DigestAlgorithm,
        expected: usize,
        actual: usize,
    },
    #[error("encoded digest needs {required} bytes, modulus is only {modulus_len} bytes")]
    MessageTooLong { required: usize, modulus_len: usize },

    // ── Keys ──────────────────────────────────────────────────────────
    #[error("RSA public key parse failed: {0}")]
    KeyParse(String),
    #[error("RSA modulus is {bits} bits, at least {minimum} required")]
    KeyTooSmall { bits: usize, minimum: usize },

    // ── Outcome ───────────────────────────────────────────────────────
    #[error("signature verification failed")]
    VerificationFailed,
}

/**
    Type alias for results that may return a [`SignatureError`].
*/
pub type SignatureResult<T> = std::result::Result<T, SignatureError>;
