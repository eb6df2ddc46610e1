//! Central application state container
//!
//! Intentionally minimal - panel-specific view state lives in panels.

use super::{FocusState, Selection};

/// Central application state
pub struct AppState {
    /// Pattern selection and simulation flag
    pub selection: Selection,

    /// Focus management
    pub focus: FocusState,

    /// Application should quit
    pub should_quit: bool,

    /// Status bar message (if any)
    pub status_message: Option<StatusMessage>,
}

/// Status bar message
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageLevel {
    Info,
    Error,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
            focus: FocusState::new(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set status message
    pub fn set_status(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Set info status
    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Info);
    }

    /// Set error status
    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert!(!state.should_quit);
        assert!(!state.selection.simulating());
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new();
        state.quit();
        assert!(state.should_quit);
    }

    #[test]
    fn test_status_message() {
        let mut state = AppState::new();

        state.info("Hello");
        assert!(state.status_message.is_some());

        state.error("Oops");
        assert_eq!(
            state.status_message.as_ref().map(|m| m.level),
            Some(MessageLevel::Error)
        );
    }
}
