//! Tauri shell integration

pub mod tauri_host;
pub mod tray;

pub use tauri_host::{TauriClipboard, TauriEvents, TauriShortcuts, TauriWindow};
