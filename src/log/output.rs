use std::{
    any::Any,
    fmt,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
};

use crate::log::sink_error::{Result, SinkError};

/// Handler type accepted by [`Output::Custom`].
pub type LineHandler = Box<dyn FnMut(&str) + Send + 'static>;

/// Destination of formatted log lines.
///
/// Owned by exactly one logger and only ever invoked from that logger's
/// worker, so the handler needs `Send` but not `Sync`.
#[derive(Default)]
pub enum Output {
    /// Appends each line plus a newline to standard output.
    #[default]
    Console,
    /// Forwards each line to a caller-supplied handler.
    Custom(LineHandler),
}

impl Output {
    /// Wraps a closure into [`Output::Custom`].
    #[must_use]
    pub fn custom<F>(handler: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Output::Custom(Box::new(handler))
    }

    /// Writes one formatted line.
    ///
    /// # Errors
    /// - [`SinkError::Io`] when standard output rejects the write.
    /// - [`SinkError::HandlerPanicked`] when the custom handler panics. The
    ///   panic is caught here and does not unwind further.
    pub fn write(&mut self, line: &str) -> Result<()> {
        match self {
            Output::Console => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()?;
                Ok(())
            }
            Output::Custom(handler) => panic::catch_unwind(AssertUnwindSafe(|| handler(line)))
                .map_err(|payload| SinkError::HandlerPanicked(panic_message(payload.as_ref()))),
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Console => f.write_str("Console"),
            Output::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
