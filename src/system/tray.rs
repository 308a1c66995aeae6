//! System tray menu

use std::sync::Arc;
use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::TrayIconBuilder,
    App, Manager,
};

use crate::app::Controller;

pub fn create_tray(app: &App) -> tauri::Result<()> {
    let show_item = MenuItem::with_id(app, "show", "Show quick access", true, None::<&str>)?;
    let hide_item = MenuItem::with_id(app, "hide", "Hide", true, None::<&str>)?;
    let separator = PredefinedMenuItem::separator(app)?;
    let quit_item = MenuItem::with_id(app, "quit", "Quit", true, None::<&str>)?;

    let menu = Menu::with_items(app, &[&show_item, &hide_item, &separator, &quit_item])?;

    let mut builder = TrayIconBuilder::new().menu(&menu);
    if let Some(icon) = app.default_window_icon() {
        builder = builder.icon(icon.clone());
    }

    builder
        .on_menu_event(|app, event| match event.id().as_ref() {
            "quit" => app.exit(0),
            "show" | "hide" => {
                let Some(controller) = app.try_state::<Arc<Controller>>() else {
                    tracing::error!("[Tray] Controller not available");
                    return;
                };
                let controller = Arc::clone(controller.inner());
                let show = event.id().as_ref() == "show";
                tauri::async_runtime::spawn(async move {
                    if show {
                        controller.show_compact().await;
                    } else {
                        controller.hide().await;
                    }
                });
            }
            _ => {}
        })
        .build(app)?;

    Ok(())
}
