//! Command modules for the Tauri web view
//!
//! - `view`: history list, filtering, selection, copy
//! - `window`: quick access popup visibility and keyboard input
//! - `settings`: read-only settings access

pub mod settings;
pub mod view;
pub mod window;
