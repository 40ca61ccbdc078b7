use thiserror::Error;

/// Errors raised while compiling a genex pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenexError {
    #[error("Unexpected end of input: {0}")]
    UnexpectedEndOfInput(String),

    #[error("Unbalanced quantifier: {0}")]
    UnbalancedQuantifier(String),

    #[error("Quantifier applied to missing expression: {0}")]
    DanglingQuantifier(String),

    #[error("Quantifier is not formatted correctly: {0}")]
    MalformedQuantifier(String),

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Choice has no alternatives")]
    EmptyChoice,

    #[error("Alternative is empty: {0}")]
    EmptyAlternative(String),

    #[error("Character set has no candidates")]
    EmptyCharset,
}

/// Result type for genex operations
pub type Result<T> = std::result::Result<T, GenexError>;
