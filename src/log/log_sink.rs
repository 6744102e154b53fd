use crate::log::{call_site::CallSite, severity::Severity};

/// Object-safe logging seam.
///
/// Components that only need to emit logs hold an `Arc<dyn LogSink>` rather
/// than a concrete logger. Callers check [`enabled`](Self::enabled) before
/// building the message; the `sink_*!` macros do this for you.
pub trait LogSink: Send + Sync {
    /// Whether a message at `severity` would be written.
    fn enabled(&self, severity: Severity) -> bool;

    /// Submits an already rendered message.
    fn submit(&self, severity: Severity, site: CallSite, message: String);
}
