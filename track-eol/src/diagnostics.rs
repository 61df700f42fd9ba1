//! Diagnostics sink
//!
//! The evaluator and cross-validator report what they decide through a
//! [`DiagnosticsSink`] handed in by the caller. [`LogSink`] forwards to the
//! `log` facade, [`MemorySink`] keeps messages around for inspection.

use std::sync::Mutex;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// A recorded diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Receiver for warning and error diagnostics
pub trait DiagnosticsSink {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that forwards to the `log` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Sink that records every diagnostic in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics recorded so far, oldest first
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|d| d.level == level)
            .map(|d| d.message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn push(&self, level: DiagnosticLevel, message: &str) {
        self.lock().push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned sink still holds valid messages
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticsSink for MemorySink {
    fn warn(&self, message: &str) {
        self.push(DiagnosticLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(DiagnosticLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.warn("first");
        sink.error("second");
        sink.warn("third");

        let entries = sink.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].level, DiagnosticLevel::Error);
        assert_eq!(sink.messages(DiagnosticLevel::Warning), vec!["first", "third"]);
        assert_eq!(sink.messages(DiagnosticLevel::Error), vec!["second"]);
    }
}
