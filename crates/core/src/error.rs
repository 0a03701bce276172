use std::io;
use std::num::ParseIntError;

/// Errors that can occur while reading and parsing an input line
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid operand '{token}': {source}")]
    InvalidOperand {
        token: String,
        source: ParseIntError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for lineval operations
pub type Result<T> = std::result::Result<T, Error>;
