use std::sync::Arc;

use thiserror::Error;

/// An error reading characters from a file or stream.
///
/// Errors are elements of a sequence, so they have to be cloneable; the
/// underlying I/O error is shared.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(Arc<std::io::Error>),
    #[error("Invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: usize },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(Arc::new(error))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
