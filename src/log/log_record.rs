use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::log::{call_site::CallSite, severity::Severity};

/// Represents a single accepted log event.
///
/// A record is built on the caller's thread once the message passed the
/// filter, travels through the logger's queue, and is formatted by the
/// worker right before the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// When the call was accepted.
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    /// Function and line the call came from.
    pub site: CallSite,
    /// The message, already rendered to text.
    pub message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    pub fn new(severity: Severity, site: CallSite, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), severity, site, message)
    }

    /// Creates a record with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Utc>,
        severity: Severity,
        site: CallSite,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            severity,
            site,
            message: message.into(),
        }
    }

    /// Renders the record as one output line:
    /// `[<timestamp>] [<LABEL>] [<function>:<line>] - <message>`.
    ///
    /// The timestamp is ISO-8601 in UTC with second precision, e.g.
    /// `2024-05-01T12:00:00Z`.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] - {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.severity.label(),
            self.site,
            self.message
        )
    }
}
