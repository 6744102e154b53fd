use std::{fmt, io};

pub type Result<T> = std::result::Result<T, SinkError>;

/// Failure while handing a formatted line to an [`Output`](crate::log::output::Output).
#[derive(Debug)]
pub enum SinkError {
    /// Writing to standard output failed.
    Io(io::Error),
    /// The custom handler panicked; carries the panic message when it was a string.
    HandlerPanicked(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SinkError::*;
        match self {
            Io(e) => write!(f, "console write failed: {e}"),
            HandlerPanicked(msg) => write!(f, "custom log handler panicked: {msg}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::HandlerPanicked(_) => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        SinkError::Io(e)
    }
}
