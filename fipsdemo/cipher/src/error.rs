use thiserror::Error;

/**
    Length precondition violated by a CBC call.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("key must be {expected} bytes, got {actual}")]
    Key { expected: usize, actual: usize },

    #[error("IV must be {expected} bytes, got {actual}")]
    Iv { expected: usize, actual: usize },

    #[error("input length {actual} is not a multiple of the {block_size}-byte block size")]
    Unaligned { block_size: usize, actual: usize },
}

/**
    Errors from the CBC cipher engine.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    // ── Validation (always before any block is processed) ─────────────
    #[error("invalid length: {0}")]
    InvalidLength(#[from] LengthError),
    #[error("{0} mode is not supported, only CBC")]
    UnsupportedMode(String),
    #[error("unknown cipher algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("weak key: {0}")]
    WeakKey(&'static str),

    // ── Block primitive ───────────────────────────────────────────────
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/**
    Type alias for results that may return a [`CipherError`].
*/
pub type CipherResult<T> = std::result::Result<T, CipherError>;
