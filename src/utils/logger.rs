use crate::domain::model::{LogLevel, LogRecord};
use crate::domain::ports::Logger;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set. `verbose` wins over `level`.
pub fn default_filter(verbose: bool, level: &str) -> String {
    if verbose {
        "small_notify=debug,info".to_string()
    } else {
        format!("small_notify={}", level.to_ascii_lowercase())
    }
}

fn env_filter(verbose: bool, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)))
}

/// Compact, human readable output for terminals.
pub fn init_cli_logger(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// One JSON object per event, for log collectors.
pub fn init_json_logger(verbose: bool, level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// `Logger` backed by `tracing`; every call becomes a single event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_info(&self, message: &str) {
        tracing::info!(target: "small_notify::notification", "{}", message);
    }

    fn log_warning(&self, message: &str) {
        tracing::warn!(target: "small_notify::notification", "{}", message);
    }

    fn log_error(&self, message: &str) {
        tracing::error!(target: "small_notify::notification", "{}", message);
    }
}

/// `Logger` that keeps every record in memory, in call order.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    // Records are pushed whole, so a poisoned buffer is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.lock().iter().filter(|r| r.level == level).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn log_info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn log_warning(&self, message: &str) {
        self.push(LogLevel::Warning, message);
    }

    fn log_error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}
