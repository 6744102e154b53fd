//! Leveled logging macros for [`Logger`](crate::log::logger::Logger) and
//! `dyn` [`LogSink`](crate::log::log_sink::LogSink).
//!
//! Every macro captures the call site and only runs `format!` when the
//! target accepts the level.
//!
//! # Feature Flags
//! Levels are compiled in by cargo features:
//! `log-debug`, `log-info`, `log-warning`, `log-error`, `log-critical`.
//! Each feature implies the ones above it. A disabled level's macros expand
//! to `()`, so their arguments are never evaluated.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        $logger.log($lvl, $crate::call_site!(), || format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        #[allow(unused_imports)]
        use $crate::log::log_sink::LogSink as _;
        let __lvl = $lvl;
        let __sink = &$sink;
        if __sink.enabled(__lvl) {
            __sink.submit(__lvl, $crate::call_site!(), format!($($arg)*));
        }
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::severity::Severity::Debug, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! sink_debug   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::severity::Severity::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! sink_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::severity::Severity::Info, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! sink_info   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::severity::Severity::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! sink_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! logger_warning { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::severity::Severity::Warning, $($arg)*) } }
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! sink_warning   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::severity::Severity::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! logger_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! sink_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::severity::Severity::Error, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! sink_error   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::severity::Severity::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! sink_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- CRITICAL ----------------------
// Generally always enabled, but the same structure lets a build strip it.
#[cfg(feature = "log-critical")]
#[macro_export]
macro_rules! logger_critical { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::severity::Severity::Critical, $($arg)*) } }
#[cfg(feature = "log-critical")]
#[macro_export]
macro_rules! sink_critical   { ($sink:expr, $($arg:tt)*)   => { $crate::sink_log!($sink, $crate::log::severity::Severity::Critical, $($arg)*) } }

#[cfg(not(feature = "log-critical"))]
#[macro_export]
macro_rules! logger_critical {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-critical"))]
#[macro_export]
macro_rules! sink_critical {
    ($($arg:tt)*) => {
        ()
    };
}
