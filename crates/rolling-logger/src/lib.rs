//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and forwards each record to a sink (browser console, stdout, ...).

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of buffered entries
pub const DEFAULT_CAPACITY: usize = 200;

/// One buffered log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS.mmm LEVEL target: message`
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Output for log entries
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

impl<F> LogSink for F
where
    F: Fn(&LogEntry) + Send + Sync,
{
    fn write(&self, entry: &LogEntry) {
        self(entry)
    }
}

/// Sink that only buffers
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _entry: &LogEntry) {}
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
    sink: Box<dyn LogSink>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
            sink: Box::new(NullSink),
        }
    }

    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Buffered entries, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        self.sink.write(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install `logger` as the global `log` backend
pub fn init(logger: RollingLogger) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = logger.level;
    let logger: &'static RollingLogger = Box::leak(Box::new(logger));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffers_entries_in_order() {
        let logger = RollingLogger::new(LevelFilter::Debug, 10);
        emit(&logger, Level::Info, "first");
        emit(&logger, Level::Warn, "second");

        let entries = logger.recent();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, Level::Warn);
        assert_eq!(entries[1].target, "test");
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("msg {}", i));
        }

        let messages: Vec<_> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_filters_by_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Info, "hidden too");
        emit(&logger, Level::Error, "shown");

        let entries = logger.recent();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
    }

    #[test]
    fn test_forwards_to_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        let logger = RollingLogger::new(LevelFilter::Info, 10)
            .with_sink(move |entry: &LogEntry| sink_seen.lock().unwrap().push(entry.message.clone()));

        emit(&logger, Level::Info, "to sink");
        emit(&logger, Level::Debug, "filtered");

        assert_eq!(*seen.lock().unwrap(), vec!["to sink".to_string()]);
    }

    #[test]
    fn test_clear_and_format() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        let entries = logger.recent();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].format_line().ends_with("INFO  test: b"));

        logger.clear();
        assert!(logger.recent().is_empty());
    }
}
