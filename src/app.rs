//! Controller
//!
//! Owns the view state and the host ports, and turns user input into host
//! calls. The view lock is never held across an await.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::filter::Category;
use crate::core::navigation::NavAction;
use crate::core::view::ClipboardView;
use crate::host::{ClipboardWriter, EventSink, WindowControl, WindowManager};
use crate::shared::events::AppEvent;
use crate::shared::settings::WindowSettings;
use crate::shared::types::{ClipboardEntry, EntryDetail, EntryId, Notification, ViewState};

pub struct Controller {
    view: Mutex<ClipboardView>,
    clipboard: Arc<dyn ClipboardWriter>,
    events: Arc<dyn EventSink>,
    windows: WindowManager,
}

impl Controller {
    pub fn new(
        window: Arc<dyn WindowControl>,
        clipboard: Arc<dyn ClipboardWriter>,
        events: Arc<dyn EventSink>,
        window_settings: WindowSettings,
    ) -> Self {
        Self {
            view: Mutex::new(ClipboardView::new()),
            clipboard,
            events,
            windows: WindowManager::new(window, window_settings),
        }
    }

    fn view(&self) -> MutexGuard<'_, ClipboardView> {
        match self.view.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::error!("[Controller] View mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }

    pub fn state(&self) -> ViewState {
        self.view().state()
    }

    /// Sink for the history poller
    pub fn apply_history(&self, entries: Vec<ClipboardEntry>) {
        let published = {
            let mut view = self.view();
            view.apply_history(entries).then(|| view.history().len())
        };
        if let Some(count) = published {
            tracing::debug!("[Controller] History updated ({} entries)", count);
            self.events.emit(&AppEvent::HistoryUpdated(count));
        }
    }

    pub fn set_category(&self, category: Category) -> ViewState {
        let mut view = self.view();
        view.set_category(category);
        view.state()
    }

    pub fn set_search_term(&self, term: String) -> ViewState {
        let mut view = self.view();
        view.set_search_term(term);
        view.state()
    }

    pub fn select_entry(&self, id: Option<EntryId>) -> Option<EntryDetail> {
        self.view().select(id)
    }

    /// Route one key press through the navigation state machine
    pub async fn handle_key(&self, key: &str) -> ViewState {
        let action = self.view().handle_key(key);
        match action {
            Some(NavAction::CopyAndHide(content)) => {
                // Copy is issued first; hide does not wait on its outcome
                self.copy_text(&content);
                self.hide().await;
            }
            Some(NavAction::Hide) => self.hide().await,
            None => {}
        }
        self.state()
    }

    /// Click-to-copy from either mode. Returns false for an unknown id.
    pub fn copy_entry(&self, id: &EntryId) -> bool {
        let content = self.view().find(id).map(|entry| entry.content.clone());
        match content {
            Some(content) => {
                self.copy_text(&content);
                true
            }
            None => {
                tracing::debug!("[Controller] Copy requested for unknown entry {}", id);
                false
            }
        }
    }

    fn copy_text(&self, content: &str) {
        if let Err(e) = self.clipboard.write_text(content) {
            tracing::warn!("[Controller] Clipboard write failed: {}", e);
        }
        self.events.emit(&AppEvent::Toast(Notification::copied()));
    }

    pub async fn show_compact(&self) {
        let entered = {
            let mut view = self.view();
            view.enter_compact().then(|| view.mode())
        };
        if let Some(mode) = entered {
            self.events.emit(&AppEvent::ModeChanged(mode));
        }
        self.windows.present_compact().await;
    }

    pub async fn hide(&self) {
        let exited = {
            let mut view = self.view();
            view.exit_compact().then(|| view.mode())
        };
        if let Some(mode) = exited {
            self.events.emit(&AppEvent::ModeChanged(mode));
        }
        self.windows.dismiss().await;
    }

    /// Global shortcut entry point
    pub async fn toggle_window(&self) {
        let visible = match self.windows.is_visible().await {
            Ok(visible) => visible,
            Err(e) => {
                tracing::warn!("[Controller] Could not query window visibility: {}", e);
                false
            }
        };

        if visible {
            self.hide().await;
        } else {
            self.show_compact().await;
        }
    }
}
