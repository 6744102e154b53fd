//! seqlog is a small leveled logger for host applications.
//!
//! A [`Logger`](log::logger::Logger) filters messages against a minimum
//! [`Severity`](log::severity::Severity), evaluates accepted messages lazily,
//! and writes them in submission order from one background worker to either
//! standard output or a custom handler.
//!
//! ```
//! use seqlog::{logger_error, logger_info, log::{logger::Logger, severity::Severity}};
//!
//! let logger = Logger::console(Severity::Warning);
//! logger_info!(logger, "not written");
//! logger_error!(logger, "disk {} is full", "/dev/sda1");
//! ```

/// Severity levels, records, outputs and the logger itself.
pub mod log;

pub use log::{
    call_site::CallSite, logger::Logger, logger_config::LoggerConfig, output::Output,
    severity::Severity,
};
