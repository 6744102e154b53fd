use crate::log::{call_site::CallSite, log_sink::LogSink, severity::Severity};

#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn enabled(&self, _severity: Severity) -> bool {
        false
    }

    #[inline]
    fn submit(&self, _severity: Severity, _site: CallSite, _message: String) {}
}
