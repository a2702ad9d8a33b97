use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("config: {0}")]
    /// Configuration could not be parsed or applied.
    Config(String),
    #[error("io: {0}")]
    /// I/O failure.
    Io(String),
    #[error("internal: {0}")]
    /// Internal error.
    Internal(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
