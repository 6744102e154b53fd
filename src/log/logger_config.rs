use crate::log::severity::Severity;

/// Name given to the worker thread unless configured otherwise.
pub const DEFAULT_THREAD_NAME: &str = "seqlog-worker";

/// Construction options for a [`Logger`](crate::log::logger::Logger).
///
/// # Example
/// ```
/// use seqlog::log::{logger_config::LoggerConfig, severity::Severity};
///
/// let cfg = LoggerConfig::default()
///     .with_min_severity(Severity::Warning)
///     .with_thread_name("audit-log");
/// assert_eq!(cfg.min_severity, Severity::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Messages below this level are discarded without being evaluated.
    pub min_severity: Severity,
    /// Name of the worker thread that performs the writes.
    pub thread_name: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::default(),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}
