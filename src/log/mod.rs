pub mod call_site;
pub mod log_macros;
pub mod log_record;
pub mod log_sink;
pub mod logger;
pub mod logger_config;
pub mod noop_log_sink;
pub mod output;
pub mod severity;
pub mod sink_error;
pub use noop_log_sink::NoopLogSink;
