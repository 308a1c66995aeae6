//! Window sequencing
//!
//! Each window operation is an independent call. A failing step is logged
//! and the rest of the sequence still runs.

use std::future::Future;
use std::sync::Arc;

use super::WindowControl;
use crate::shared::error::AppResult;
use crate::shared::settings::WindowSettings;

pub struct WindowManager {
    window: Arc<dyn WindowControl>,
    settings: WindowSettings,
}

impl WindowManager {
    pub fn new(window: Arc<dyn WindowControl>, settings: WindowSettings) -> Self {
        Self { window, settings }
    }

    /// resize -> center -> drop decorations -> always on top -> show -> focus
    pub async fn present_compact(&self) {
        let w = &self.window;
        step("set_size", w.set_size(self.settings.compact_width, self.settings.compact_height)).await;
        step("center", w.center()).await;
        step("set_decorations", w.set_decorations(false)).await;
        step("set_always_on_top", w.set_always_on_top(true)).await;
        step("show", w.show()).await;
        step("set_focus", w.set_focus()).await;
    }

    /// Restore decorations and hide
    pub async fn dismiss(&self) {
        let w = &self.window;
        step("set_decorations", w.set_decorations(true)).await;
        step("set_always_on_top", w.set_always_on_top(false)).await;
        step("hide", w.hide()).await;
    }

    pub async fn is_visible(&self) -> AppResult<bool> {
        self.window.is_visible().await
    }
}

async fn step<F>(name: &str, call: F)
where
    F: Future<Output = AppResult<()>>,
{
    if let Err(e) = call.await {
        tracing::warn!("[WindowManager] {} failed: {}", name, e);
    }
}
