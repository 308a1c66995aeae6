//! Keyboard navigation for the quick access popup
//!
//! One state machine consumes every key press. Keys are mapped to commands
//! through [`KEY_BINDINGS`]; commands move the focus with wrap-around or
//! produce a terminal [`NavAction`] for the caller to carry out.

use serde::{Deserialize, Serialize};

use crate::shared::types::ClipboardEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    MoveNext,
    MovePrevious,
    Confirm,
    Dismiss,
}

/// DOM key names handled while the popup is up
pub const KEY_BINDINGS: &[(&str, NavCommand)] = &[
    ("ArrowDown", NavCommand::MoveNext),
    ("ArrowUp", NavCommand::MovePrevious),
    ("Enter", NavCommand::Confirm),
    ("Escape", NavCommand::Dismiss),
];

pub fn command_for_key(key: &str) -> Option<NavCommand> {
    KEY_BINDINGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, command)| *command)
}

/// Side effect requested by a navigation command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Copy the content, then hide the window
    CopyAndHide(String),
    Hide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Inactive,
    Active,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavState,
    focused: Option<usize>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == NavState::Active
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Compact mode entered
    pub fn activate(&mut self, len: usize) {
        self.state = NavState::Active;
        self.focus_first(len);
    }

    /// Compact mode exited
    pub fn deactivate(&mut self) {
        self.state = NavState::Inactive;
        self.focused = None;
    }

    /// The filtered sequence was replaced; drop any stale focus
    pub fn reset(&mut self, len: usize) {
        if self.is_active() {
            self.focus_first(len);
        } else {
            self.focused = None;
        }
    }

    fn focus_first(&mut self, len: usize) {
        self.focused = if len > 0 { Some(0) } else { None };
    }

    pub fn handle_key(&mut self, key: &str, entries: &[ClipboardEntry]) -> Option<NavAction> {
        let command = command_for_key(key)?;
        self.handle(command, entries)
    }

    pub fn handle(&mut self, command: NavCommand, entries: &[ClipboardEntry]) -> Option<NavAction> {
        if !self.is_active() {
            return None;
        }

        let len = entries.len();
        match command {
            NavCommand::MoveNext => {
                if len > 0 {
                    self.focused = Some(match self.focused {
                        Some(i) => (i + 1) % len,
                        None => 0,
                    });
                }
                None
            }
            NavCommand::MovePrevious => {
                if len > 0 {
                    self.focused = Some(match self.focused {
                        Some(0) | None => len - 1,
                        Some(i) => (i - 1).min(len - 1),
                    });
                }
                None
            }
            NavCommand::Confirm => {
                let entry = self.focused.and_then(|i| entries.get(i))?;
                Some(NavAction::CopyAndHide(entry.content.clone()))
            }
            NavCommand::Dismiss => Some(NavAction::Hide),
        }
    }
}
