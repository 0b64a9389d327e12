//! LogState - Activity Log with Ring Buffer

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Severity of an activity log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    /// Label and color shown in the log panel.
    pub fn style(self) -> (&'static str, gpui::Rgba) {
        match self {
            LogLevel::Info => ("INFO", gpui::rgba(0x22c55eff)),
            LogLevel::Warn => ("WARN", gpui::rgba(0xf59e0bff)),
            LogLevel::Error => ("ERROR", gpui::rgba(0xef4444ff)),
            LogLevel::Debug => ("DEBUG", gpui::rgba(0x6b7280ff)),
        }
    }

    pub fn label(self) -> &'static str {
        self.style().0
    }

    pub fn color(self) -> gpui::Rgba {
        self.style().1
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Bounded activity log. Entries are kept oldest-first; pushing past the
/// capacity evicts from the front, ids keep counting up so evictions are
/// observable.
#[derive(Debug)]
pub struct LogState {
    buf: VecDeque<LogEntry>,
    cap: usize,
    seq: u64,
    /// Whether the panel is expanded.
    pub expanded: bool,
}

impl LogState {
    pub fn new(cap: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(cap),
            cap,
            seq: 0,
            expanded: false,
        }
    }

    pub fn push(
        &mut self,
        level: LogLevel,
        message: impl Into<String>,
        timestamp: DateTime<Local>,
    ) {
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.seq += 1;
        self.buf.push_back(LogEntry {
            id: self.seq,
            level,
            message: message.into(),
            timestamp,
        });
    }

    /// Push stamped with the current wall clock.
    pub fn push_now(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push(level, message, Local::now());
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut state = LogState::new(3);
        for i in 0..5 {
            state.push_now(LogLevel::Info, format!("entry {i}"));
        }
        assert_eq!(state.len(), 3);
        let messages: Vec<_> = state.entries().iter().map(|e| e.message.clone()).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_ids_stay_monotonic_across_eviction() {
        let mut state = LogState::new(2);
        for _ in 0..4 {
            state.push_now(LogLevel::Debug, "x");
        }
        let ids: Vec<_> = state.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut state = LogState::default();
        state.push_now(LogLevel::Error, "boom");
        assert!(!state.is_empty());
        state.clear();
        assert!(state.is_empty());
    }
}
