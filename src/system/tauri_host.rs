//! Tauri adapters for the host ports

use async_trait::async_trait;
use tauri::{AppHandle, Emitter, Manager, PhysicalSize, WebviewWindow};
use tauri_plugin_clipboard_manager::ClipboardExt;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::host::{ClipboardWriter, EventSink, ShortcutHandler, ShortcutRegistrar, WindowControl};
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;

/// The single application window, looked up by label on every call
pub struct TauriWindow {
    app: AppHandle,
    label: String,
}

impl TauriWindow {
    pub fn new(app: AppHandle, label: impl Into<String>) -> Self {
        Self { app, label: label.into() }
    }

    fn window(&self) -> AppResult<WebviewWindow> {
        self.app
            .get_webview_window(&self.label)
            .ok_or_else(|| AppError::Window(format!("Window '{}' not found", self.label)))
    }
}

#[async_trait]
impl WindowControl for TauriWindow {
    async fn show(&self) -> AppResult<()> {
        Ok(self.window()?.show()?)
    }

    async fn hide(&self) -> AppResult<()> {
        Ok(self.window()?.hide()?)
    }

    async fn is_visible(&self) -> AppResult<bool> {
        Ok(self.window()?.is_visible()?)
    }

    async fn set_size(&self, width: u32, height: u32) -> AppResult<()> {
        Ok(self.window()?.set_size(PhysicalSize::new(width, height))?)
    }

    async fn center(&self) -> AppResult<()> {
        Ok(self.window()?.center()?)
    }

    async fn set_decorations(&self, decorations: bool) -> AppResult<()> {
        Ok(self.window()?.set_decorations(decorations)?)
    }

    async fn set_always_on_top(&self, always_on_top: bool) -> AppResult<()> {
        Ok(self.window()?.set_always_on_top(always_on_top)?)
    }

    async fn set_focus(&self) -> AppResult<()> {
        Ok(self.window()?.set_focus()?)
    }
}

/// Write text to clipboard using Tauri's clipboard manager
pub struct TauriClipboard {
    app: AppHandle,
}

impl TauriClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ClipboardWriter for TauriClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        self.app
            .clipboard()
            .write_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Emit application events to all web views
pub struct TauriEvents {
    app: AppHandle,
}

impl TauriEvents {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl EventSink for TauriEvents {
    fn emit(&self, event: &AppEvent) {
        let result = match event {
            AppEvent::HistoryUpdated(count) => self.app.emit(event.name(), *count),
            AppEvent::Toast(notification) => self.app.emit(event.name(), notification.clone()),
            AppEvent::ModeChanged(mode) => self.app.emit(event.name(), *mode),
        };
        if let Err(e) = result {
            tracing::warn!("[TauriEvents] Failed to emit {}: {}", event.name(), e);
        }
    }
}

pub struct TauriShortcuts {
    app: AppHandle,
}

impl TauriShortcuts {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

fn parse_shortcut(accelerator: &str) -> AppResult<Shortcut> {
    accelerator
        .parse::<Shortcut>()
        .map_err(|e| AppError::Shortcut(format!("Failed to parse shortcut '{}': {}", accelerator, e)))
}

impl ShortcutRegistrar for TauriShortcuts {
    fn register(&self, accelerator: &str, handler: ShortcutHandler) -> AppResult<()> {
        let shortcut = parse_shortcut(accelerator)?;
        self.app
            .global_shortcut()
            .on_shortcut(shortcut, move |_app, _shortcut, event| {
                if event.state() == ShortcutState::Pressed {
                    handler();
                }
            })
            .map_err(|e| AppError::Shortcut(e.to_string()))
    }

    fn unregister(&self, accelerator: &str) -> AppResult<()> {
        let shortcut = parse_shortcut(accelerator)?;
        self.app
            .global_shortcut()
            .unregister(shortcut)
            .map_err(|e| AppError::Shortcut(e.to_string()))
    }

    fn is_registered(&self, accelerator: &str) -> bool {
        match parse_shortcut(accelerator) {
            Ok(shortcut) => self.app.global_shortcut().is_registered(shortcut),
            Err(_) => false,
        }
    }
}
