//! Logging port
//!
//! The host dispatcher owns logging configuration; this crate only needs a
//! leveled sink to report through. Implementations can be:
//! - [`TracingLogger`]: forwards to the `tracing` macros
//! - [`RecordingLogger`]: collects entries in memory (tests, batch reports)
//! - [`NoopLogger`]: silent operation

use std::sync::{Arc, Mutex};

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

/// Trait for receiving leveled log messages
pub trait Logger {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// No-op logger for silent operation
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Logger that forwards to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Logger that records every entry in memory
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared with a
/// handler while the caller keeps inspecting the entries.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries in emission order
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages recorded at a given level, in emission order
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Debug, message.to_string()));
    }

    fn info(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((Level::Error, message.to_string()));
    }
}
