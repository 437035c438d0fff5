//! Literal-text errors.
//!
//! The parser validates token shape before calling a constant factory, so
//! inside the factories these errors are contract violations and abort the
//! compilation. The parsing helpers that produce them are public so callers
//! can check a token before committing to a node.

/// Malformed literal text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("literal has no digits")]
    NoDigits,

    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    #[error("unsupported radix {0}")]
    UnsupportedRadix(u32),

    #[error("integer width must be non-zero")]
    ZeroWidth,

    #[error("unknown BOZ prefix {0:?}")]
    UnknownBozPrefix(char),

    #[error("BOZ literal is missing its opening delimiter")]
    MissingBozDelimiter,

    #[error("BOZ literal is missing its closing {0:?} delimiter")]
    UnterminatedBoz(char),

    #[error("malformed real literal {0:?}")]
    MalformedReal(String),
}
