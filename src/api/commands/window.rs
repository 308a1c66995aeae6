//! Window management command module
//!
//! Keyboard input is routed here too, since Enter and Escape end in a hide.

use std::sync::Arc;
use tauri::State;

use crate::app::Controller;
use crate::shared::error::AppResult;
use crate::shared::types::ViewState;

/// Forward a DOM key name (`ArrowUp`, `ArrowDown`, `Enter`, `Escape`)
#[tauri::command]
pub async fn handle_key(controller: State<'_, Arc<Controller>>, key: String) -> AppResult<ViewState> {
    Ok(controller.handle_key(&key).await)
}

#[tauri::command]
pub async fn show_compact(controller: State<'_, Arc<Controller>>) -> AppResult<()> {
    controller.show_compact().await;
    Ok(())
}

#[tauri::command]
pub async fn hide_window(controller: State<'_, Arc<Controller>>) -> AppResult<()> {
    controller.hide().await;
    Ok(())
}

#[tauri::command]
pub async fn toggle_window(controller: State<'_, Arc<Controller>>) -> AppResult<()> {
    controller.toggle_window().await;
    Ok(())
}
