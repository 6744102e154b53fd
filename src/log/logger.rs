use std::{
    fmt::{self, Display},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
        mpsc::{self, Receiver, SendError, Sender},
    },
    thread::{self, JoinHandle},
};

use crate::log::{
    call_site::CallSite, log_record::LogRecord, log_sink::LogSink, logger_config::LoggerConfig,
    output::Output, severity::Severity,
};

/// Leveled logger that writes through a single ordered worker.
///
/// # Architecture
///
/// 1. **Filter**: `log` compares the severity against the threshold on the
///    caller's thread. Rejected calls return without touching the message.
/// 2. **Queue**: accepted records go into an unbounded `mpsc` channel, which
///    keeps submission order across all calling threads.
/// 3. **Worker**: one background thread formats each record and hands it to
///    the [`Output`]. Sink failures are counted and the record is dropped.
///
/// Records are stamped when the call is accepted, on the caller's thread.
/// With several callers racing, the written order is the queue order, so
/// consecutive lines may carry timestamps that go slightly backwards.
///
/// Dropping the logger closes the queue and waits for the worker, so every
/// accepted record is written before `drop` returns.
///
/// # Example
/// ```
/// use seqlog::{call_site, log::{logger::Logger, output::Output, severity::Severity}};
///
/// let logger = Logger::new(Severity::Warning, Output::Console);
/// logger.log(Severity::Info, call_site!(), || "skipped");
/// logger.log(Severity::Error, call_site!(), || "written");
/// ```
pub struct Logger {
    min_severity: Severity,
    tx: Option<Sender<LogRecord>>,
    worker: Option<JoinHandle<()>>,
    shared: Arc<Shared>,
}

/// State reachable from both the worker and the inline fallback path.
struct Shared {
    output: Mutex<Output>,
    faults: AtomicU64,
}

impl Shared {
    fn write(&self, record: &LogRecord) {
        let line = record.format();
        // Output::write catches handler panics, so the lock is never poisoned by it.
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        if output.write(&line).is_err() {
            self.faults.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Logger {
    /// Creates a logger with the given threshold and output.
    #[must_use]
    pub fn new(min_severity: Severity, output: Output) -> Self {
        Self::with_config(LoggerConfig::default().with_min_severity(min_severity), output)
    }

    /// Creates a logger that writes to standard output.
    #[must_use]
    pub fn console(min_severity: Severity) -> Self {
        Self::new(min_severity, Output::Console)
    }

    /// Creates a logger that forwards every formatted line to `handler`.
    #[must_use]
    pub fn custom<F>(min_severity: Severity, handler: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Self::new(min_severity, Output::custom(handler))
    }

    /// Creates a logger from a full [`LoggerConfig`].
    ///
    /// Never fails. If the worker thread cannot be spawned, records are
    /// written inline on the calling thread instead. In that mode a custom
    /// handler must not log back into the same logger: the output mutex is
    /// not reentrant and the nested call would deadlock.
    #[must_use]
    pub fn with_config(config: LoggerConfig, output: Output) -> Self {
        let shared = Arc::new(Shared {
            output: Mutex::new(output),
            faults: AtomicU64::new(0),
        });

        let (tx, rx) = mpsc::channel::<LogRecord>();
        let worker = spawn_worker(config.thread_name, rx, Arc::clone(&shared));
        let tx = worker.as_ref().map(|_| tx);

        Self {
            min_severity: config.min_severity,
            tx,
            worker,
            shared,
        }
    }

    /// Logs a message produced by `message` at `severity`.
    ///
    /// The closure runs at most once, on the calling thread, and only when
    /// `severity >= min_severity()`. The write itself happens later on the
    /// worker; this call does not wait for it and reports nothing back.
    ///
    /// A panic inside `message` propagates to the caller.
    pub fn log<F, M>(&self, severity: Severity, site: CallSite, message: F)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        if !self.is_enabled(severity) {
            return;
        }
        self.dispatch(LogRecord::new(severity, site, message().to_string()));
    }

    /// The filtering floor this logger was built with.
    #[must_use]
    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Whether a message at `severity` passes the filter.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Number of accepted records that were dropped because the output failed.
    #[must_use]
    pub fn sink_faults(&self) -> u64 {
        self.shared.faults.load(Ordering::Relaxed)
    }

    fn dispatch(&self, record: LogRecord) {
        // The receiver outlives `tx` while a worker exists, so a record only
        // comes back here when the worker could not be spawned.
        let unsent = match &self.tx {
            Some(tx) => tx.send(record).err().map(|SendError(record)| record),
            None => Some(record),
        };
        if let Some(record) = unsent {
            self.shared.write(&record);
        }
    }

    #[cfg(test)]
    fn without_worker(min_severity: Severity, output: Output) -> Self {
        Self {
            min_severity,
            tx: None,
            worker: None,
            shared: Arc::new(Shared {
                output: Mutex::new(output),
                faults: AtomicU64::new(0),
            }),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::default(), Output::default())
    }
}

impl LogSink for Logger {
    fn enabled(&self, severity: Severity) -> bool {
        self.is_enabled(severity)
    }

    fn submit(&self, severity: Severity, site: CallSite, message: String) {
        if self.is_enabled(severity) {
            self.dispatch(LogRecord::new(severity, site, message));
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_severity", &self.min_severity)
            .field("worker", &self.worker.as_ref().map(|w| w.thread().name()))
            .field("sink_faults", &self.sink_faults())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the backlog is written.
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.thread().id() != thread::current().id() {
                let _ = worker.join();
            }
        }
    }
}

fn spawn_worker(
    name: String,
    rx: Receiver<LogRecord>,
    shared: Arc<Shared>,
) -> Option<JoinHandle<()>> {
    thread::Builder::new()
        .name(name)
        .spawn(move || {
            while let Ok(record) = rx.recv() {
                shared.write(&record);
            }
        })
        .ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::call_site;
    use chrono::{DateTime, Utc};
    use std::{
        cell::Cell,
        sync::{OnceLock, Weak, mpsc::RecvTimeoutError},
        time::Duration,
    };

    const WAIT: Duration = Duration::from_secs(5);

    fn capture(min: Severity) -> (Logger, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        let logger = Logger::custom(min, move |line| {
            let _ = tx.send(line.to_string());
        });
        (logger, rx)
    }

    #[test]
    fn accepted_message_reaches_handler_formatted() {
        let (logger, rx) = capture(Severity::Debug);
        let line_no = line!() + 1;
        logger.log(Severity::Info, call_site!(), || "ready");

        let line = rx.recv_timeout(WAIT).expect("a line should arrive");
        let expected_tail = format!(
            "] [INFO] [accepted_message_reaches_handler_formatted:{line_no}] - ready"
        );
        assert!(line.starts_with('['), "got: {line}");
        assert!(line.ends_with(&expected_tail), "got: {line}");
    }

    #[test]
    fn rejected_message_is_never_evaluated() {
        let (logger, rx) = capture(Severity::Error);
        let calls = Cell::new(0);
        logger.log(Severity::Warning, call_site!(), || {
            calls.set(calls.get() + 1);
            "expensive"
        });
        drop(logger);

        assert_eq!(calls.get(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn accepted_message_is_evaluated_once() {
        let (logger, rx) = capture(Severity::Debug);
        let calls = Cell::new(0);
        logger.log(Severity::Critical, call_site!(), || {
            calls.set(calls.get() + 1);
            42
        });
        drop(logger);

        assert_eq!(calls.get(), 1);
        let lines: Vec<String> = rx.try_iter().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("- 42"), "got: {}", lines[0]);
    }

    #[test]
    fn log_returns_before_the_write_completes() {
        let (gate_tx, gate_rx) = mpsc::channel::<()>();
        let (out_tx, out_rx) = mpsc::channel::<String>();
        let logger = Logger::custom(Severity::Debug, move |line| {
            let _ = gate_rx.recv();
            let _ = out_tx.send(line.to_string());
        });

        logger.log(Severity::Info, call_site!(), || "held");
        assert_eq!(
            out_rx.recv_timeout(Duration::from_millis(50)),
            Err(RecvTimeoutError::Timeout)
        );

        gate_tx.send(()).unwrap();
        let line = out_rx.recv_timeout(WAIT).expect("released write");
        assert!(line.ends_with("- held"));
    }

    #[test]
    fn drop_drains_the_queue() {
        let (tx, rx) = mpsc::channel();
        let logger = Logger::custom(Severity::Debug, move |line| {
            thread::sleep(Duration::from_millis(2));
            let _ = tx.send(line.to_string());
        });
        for i in 0..20 {
            logger.log(Severity::Debug, call_site!(), || i);
        }
        drop(logger);

        let lines: Vec<String> = rx.try_iter().collect();
        assert_eq!(lines.len(), 20);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.ends_with(&format!("- {i}")), "line {i}: {line}");
        }
    }

    #[test]
    fn panicking_handler_is_counted_and_worker_survives() {
        let (tx, rx) = mpsc::channel();
        let logger = Logger::custom(Severity::Debug, move |line| {
            if line.ends_with("- boom") {
                panic!("sink failure");
            }
            let _ = tx.send(line.to_string());
        });

        logger.log(Severity::Error, call_site!(), || "boom");
        logger.log(Severity::Error, call_site!(), || "after");

        let line = rx.recv_timeout(WAIT).expect("later record still delivered");
        assert!(line.ends_with("- after"));
        assert_eq!(logger.sink_faults(), 1);
    }

    #[test]
    fn suppressed_threshold_accepts_everything() {
        let (logger, rx) = capture(Severity::Suppressed);
        for level in Severity::ALL {
            logger.log(level, call_site!(), || level);
        }
        drop(logger);
        assert_eq!(rx.try_iter().count(), Severity::ALL.len());
    }

    #[test]
    fn writes_happen_on_the_named_worker() {
        let (tx, rx) = mpsc::channel();
        let config = LoggerConfig::default().with_thread_name("named-log-worker");
        let logger = Logger::with_config(
            config,
            Output::custom(move |_| {
                let _ = tx.send(thread::current().name().map(str::to_string));
            }),
        );
        logger.log(Severity::Info, call_site!(), || "x");

        let name = rx.recv_timeout(WAIT).expect("handler ran");
        assert_eq!(name.as_deref(), Some("named-log-worker"));
    }

    #[test]
    fn usable_as_dyn_log_sink() {
        let (logger, rx) = capture(Severity::Info);
        let sink: Arc<dyn LogSink> = Arc::new(logger);

        assert!(!sink.enabled(Severity::Debug));
        assert!(sink.enabled(Severity::Info));
        sink.submit(Severity::Debug, call_site!(), "hidden".into());
        sink.submit(Severity::Warning, CallSite::new("component", 9), "shown".into());
        drop(sink);

        let lines: Vec<String> = rx.try_iter().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("] [WARNING] [component:9] - shown"));
    }

    #[test]
    fn accessors_reflect_construction() {
        let logger = Logger::default();
        assert_eq!(logger.min_severity(), Severity::Debug);
        assert!(logger.is_enabled(Severity::Debug));
        assert!(!logger.is_enabled(Severity::Suppressed));
        assert_eq!(logger.sink_faults(), 0);

        let logger = Logger::console(Severity::Error);
        assert!(!logger.is_enabled(Severity::Warning));
        assert!(logger.is_enabled(Severity::Critical));
    }

    #[test]
    fn last_reference_dropped_on_the_worker() {
        let slot: Arc<Mutex<Option<Logger>>> = Arc::new(Mutex::new(None));
        let (tx, rx) = mpsc::channel();
        let handler_slot = Arc::clone(&slot);
        let logger = Logger::custom(Severity::Debug, move |line| {
            let _ = tx.send(line.to_string());
            let taken = handler_slot.lock().unwrap().take();
            drop(taken);
        });
        *slot.lock().unwrap() = Some(logger);

        slot.lock()
            .unwrap()
            .as_ref()
            .expect("logger in slot")
            .log(Severity::Info, call_site!(), || "first");

        let line = rx.recv_timeout(WAIT).expect("first line");
        assert!(line.ends_with("- first"));
        // The worker exits and drops the handler, which closes its sender.
        assert_eq!(rx.recv_timeout(WAIT), Err(RecvTimeoutError::Disconnected));
        assert!(slot.lock().unwrap().is_none());
    }

    #[test]
    fn handler_can_log_into_its_own_logger() {
        let me: Arc<OnceLock<Weak<Logger>>> = Arc::new(OnceLock::new());
        let (tx, rx) = mpsc::channel();
        let handler_me = Arc::clone(&me);
        let logger = Arc::new(Logger::custom(Severity::Debug, move |line| {
            let _ = tx.send(line.to_string());
            if line.ends_with("- outer") {
                if let Some(logger) = handler_me.get().and_then(Weak::upgrade) {
                    logger.log(Severity::Info, call_site!(), || "inner");
                }
            }
        }));
        me.set(Arc::downgrade(&logger)).expect("set once");

        logger.log(Severity::Info, call_site!(), || "outer");
        let first = rx.recv_timeout(WAIT).expect("outer line");
        let second = rx.recv_timeout(WAIT).expect("inner line");
        assert!(first.ends_with("- outer"));
        assert!(second.ends_with("- inner"));
    }

    #[test]
    fn without_worker_writes_inline() {
        let (tx, rx) = mpsc::channel();
        let logger = Logger::without_worker(
            Severity::Info,
            Output::custom(move |line| {
                let _ = tx.send(line.to_string());
            }),
        );

        logger.log(Severity::Debug, call_site!(), || "hidden");
        assert!(rx.try_recv().is_err());

        logger.log(Severity::Warning, call_site!(), || "now");
        let line = rx.try_recv().expect("written before log returned");
        assert!(line.ends_with("- now"));

        let failing = Logger::without_worker(Severity::Debug, Output::custom(|_| panic!("down")));
        failing.log(Severity::Error, call_site!(), || "lost");
        assert_eq!(failing.sink_faults(), 1);
    }

    #[test]
    fn timestamp_is_taken_at_acceptance() {
        let (gate_tx, gate_rx) = mpsc::channel::<()>();
        let (out_tx, out_rx) = mpsc::channel::<String>();
        let logger = Logger::custom(Severity::Debug, move |line| {
            let _ = gate_rx.recv();
            let _ = out_tx.send(line.to_string());
        });

        logger.log(Severity::Info, call_site!(), || "stamped");
        thread::sleep(Duration::from_millis(1_100));
        let released = Utc::now();
        gate_tx.send(()).unwrap();

        let line = out_rx.recv_timeout(WAIT).expect("released write");
        let stamp = DateTime::parse_from_rfc3339(&line[1..21]).expect("rfc3339 stamp");
        assert!(
            stamp.with_timezone(&Utc) < released - chrono::TimeDelta::try_seconds(1).expect("one second"),
            "stamp {stamp} should predate release {released}"
        );
    }
}
