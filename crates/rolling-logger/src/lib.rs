//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a fixed-size
//! circular buffer and echoes each record to the platform sink
//! (browser console on wasm32, stderr elsewhere).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Default number of entries kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<Arc<Mutex<RollingBuffer>>> = OnceLock::new();

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Maximum entries retained; the oldest is evicted first
    pub capacity: usize,
    /// Records above this level are dropped
    pub level: LevelFilter,
    /// Forward every record to the console/stderr as well
    pub echo: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: LevelFilter::Info,
            echo: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// One buffered log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity ring of log entries
#[derive(Debug)]
pub struct RollingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `log::Log` implementation writing into a shared `RollingBuffer`
pub struct RollingLogger {
    buffer: Arc<Mutex<RollingBuffer>>,
    level: LevelFilter,
    echo: bool,
}

impl RollingLogger {
    pub fn new(config: &LoggerConfig) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(RollingBuffer::new(config.capacity))),
            level: config.level,
            echo: config.echo,
        }
    }

    pub fn buffer(&self) -> Arc<Mutex<RollingBuffer>> {
        Arc::clone(&self.buffer)
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
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            sink::emit(&entry);
        }
        // A poisoned lock only means another writer panicked mid-push
        let mut buffer = match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.push(entry);
    }

    fn flush(&self) {}
}

/// Install the rolling logger as the global `log` backend
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    let logger = RollingLogger::new(&config);
    BUFFER
        .set(logger.buffer())
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_boxed_logger(Box::new(logger)).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(config.level);
    Ok(())
}

/// Entries currently held by the global logger, oldest first
pub fn recent() -> Vec<LogEntry> {
    BUFFER
        .get()
        .map(|buffer| match buffer.lock() {
            Ok(guard) => guard.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        })
        .unwrap_or_default()
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    write_global(Level::Info, message)
}

fn write_global(level: Level, message: &str) -> Result<(), LoggerError> {
    if BUFFER.get().is_none() {
        return Err(LoggerError::NotInitialized);
    }
    log::log!(target: "app", level, "{}", message);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogEntry;
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn emit(entry: &LogEntry) {
        let line = JsValue::from_str(&entry.to_string());
        match entry.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogEntry;

    pub fn emit(entry: &LogEntry) {
        eprintln!("{}", entry);
    }
}
