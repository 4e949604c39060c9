// Console state management.
// In-app activity log where failed fetches and other diagnostics are recorded.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

/// Maximum number of messages retained; oldest are dropped first.
pub const CONSOLE_CAPACITY: usize = 500;

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

/// A console message for the activity log.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Error, message)
    }

    fn new(level: ConsoleLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Activity log plus the list state used to scroll it.
#[derive(Debug, Default)]
pub struct Console {
    messages: Vec<ConsoleMessage>,
    /// Errors logged since the console was last viewed (tab badge).
    unread_errors: usize,
    pub list_state: ListState,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ConsoleMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn unread_errors(&self) -> usize {
        self.unread_errors
    }

    /// Add an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.record(ConsoleMessage::info(message));
    }

    /// Add an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.record(ConsoleMessage::error(message));
    }

    /// Append a message built elsewhere; errors bump the unread badge.
    pub fn record(&mut self, message: ConsoleMessage) {
        if message.level == ConsoleLevel::Error {
            self.unread_errors += 1;
        }
        self.messages.push(message);
        if self.messages.len() > CONSOLE_CAPACITY {
            let overflow = self.messages.len() - CONSOLE_CAPACITY;
            let dropped_errors = self
                .messages
                .drain(..overflow)
                .filter(|m| m.level == ConsoleLevel::Error)
                .count();
            if dropped_errors > 0 {
                // Unread errors are the newest ones; never count more than remain
                let retained = self
                    .messages
                    .iter()
                    .filter(|m| m.level == ConsoleLevel::Error)
                    .count();
                self.unread_errors = self.unread_errors.min(retained);
            }
        }
        self.list_state.select(Some(0));
    }

    /// Clear the unread badge (console tab is being viewed).
    pub fn mark_read(&mut self) {
        self.unread_errors = 0;
    }

    /// Select previous message in list.
    pub fn select_prev(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select next message in list.
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let last = self.messages.len() - 1;
        let i = match self.list_state.selected() {
            Some(i) if i >= last => last,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
