//! Window mode session
//!
//! Explicit two-state object describing whether the quick access popup is up.
//! Whoever needs to query or change the mode borrows the session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WindowMode {
    /// Regular main window
    #[default]
    Full,
    /// Quick access popup opened by the global shortcut
    Compact,
}

#[derive(Debug, Clone, Default)]
pub struct WindowSession {
    mode: WindowMode,
}

impl WindowSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn is_compact(&self) -> bool {
        self.mode == WindowMode::Compact
    }

    /// Returns true when the mode actually changed
    pub fn enter_compact(&mut self) -> bool {
        self.transition(WindowMode::Compact)
    }

    /// Returns true when the mode actually changed
    pub fn exit_compact(&mut self) -> bool {
        self.transition(WindowMode::Full)
    }

    fn transition(&mut self, to: WindowMode) -> bool {
        if self.mode == to {
            return false;
        }
        tracing::debug!("[WindowSession] {:?} -> {:?}", self.mode, to);
        self.mode = to;
        true
    }
}
