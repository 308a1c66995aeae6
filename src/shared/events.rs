use serde::Serialize;
use super::types::Notification;
use crate::core::session::WindowMode;

pub const HISTORY_UPDATED: &str = "history://updated";
pub const TOAST_SHOW: &str = "toast://show";
pub const WINDOW_MODE: &str = "window://mode";

/// Events pushed from the client core to the web view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum AppEvent {
    /// A refresh published a new snapshot; payload is the entry count
    #[serde(rename = "history://updated")]
    HistoryUpdated(usize),

    #[serde(rename = "toast://show")]
    Toast(Notification),

    #[serde(rename = "window://mode")]
    ModeChanged(WindowMode),
}

impl AppEvent {
    /// Channel name the web view listens on
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::HistoryUpdated(_) => HISTORY_UPDATED,
            AppEvent::Toast(_) => TOAST_SHOW,
            AppEvent::ModeChanged(_) => WINDOW_MODE,
        }
    }
}
