use thiserror::Error;

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Errors from reading bounded input at the file boundary.
*/
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("input exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
