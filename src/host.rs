//! Host ports
//!
//! The capture/storage process, the system clipboard, the application window
//! and the global shortcut service are all outside this crate. Each is reached
//! through one of the traits below so the client logic can be driven by Tauri
//! in the app and by recording fakes in tests.

pub mod http;
pub mod shortcut;
pub mod window;

use async_trait::async_trait;
use std::sync::Arc;

use crate::shared::error::AppResult;
use crate::shared::events::AppEvent;
use crate::shared::types::ClipboardEntry;

pub use http::HttpHistorySource;
pub use shortcut::{register_with_retry, unregister_quietly};
pub use window::WindowManager;

/// Read side of the host: the ordered history, most recent first
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch_history(&self) -> AppResult<Vec<ClipboardEntry>>;
}

/// System clipboard write. Fire-and-forget from the caller's point of view.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> AppResult<()>;
}

/// Outward events (toasts, history updates, mode changes)
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &AppEvent);
}

/// Operations on the single application window
#[async_trait]
pub trait WindowControl: Send + Sync {
    async fn show(&self) -> AppResult<()>;
    async fn hide(&self) -> AppResult<()>;
    async fn is_visible(&self) -> AppResult<bool>;
    async fn set_size(&self, width: u32, height: u32) -> AppResult<()>;
    async fn center(&self) -> AppResult<()>;
    async fn set_decorations(&self, decorations: bool) -> AppResult<()>;
    async fn set_always_on_top(&self, always_on_top: bool) -> AppResult<()>;
    async fn set_focus(&self) -> AppResult<()>;
}

pub type ShortcutHandler = Arc<dyn Fn() + Send + Sync>;

/// Global key-combination bindings
pub trait ShortcutRegistrar: Send + Sync {
    /// Bind `accelerator`; the handler runs on key press
    fn register(&self, accelerator: &str, handler: ShortcutHandler) -> AppResult<()>;
    fn unregister(&self, accelerator: &str) -> AppResult<()>;
    fn is_registered(&self, accelerator: &str) -> bool;
}
