use std::{fmt, str::FromStr};

/// Defines the severity levels for log messages.
///
/// Levels are totally ordered by declaration: `Suppressed` is the lowest and
/// `Critical` the highest. A logger accepts a message when its severity is at
/// or above the logger's threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Lowest level. As a threshold it lets everything through.
    Suppressed,
    /// Fine-grained events that are mostly useful while debugging.
    #[default]
    Debug,
    /// Coarse-grained progress messages.
    Info,
    /// Potentially harmful situations.
    Warning,
    /// Errors the application may still recover from.
    Error,
    /// Failures that usually lead to termination.
    Critical,
}

impl Severity {
    /// Every level, lowest first.
    pub const ALL: [Severity; 6] = [
        Severity::Suppressed,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Label used as the level prefix of a formatted line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Suppressed => "NO LOGGING",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts labels and variant names in any case, plus a few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "no logging" | "no" | "none" | "off" | "suppressed" => Ok(Severity::Suppressed),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" | "crit" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
