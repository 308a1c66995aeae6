// Module declarations
pub mod shared;
pub mod core;
pub mod host;
pub mod app;
pub mod logging;

#[cfg(feature = "desktop")]
mod api;
#[cfg(feature = "desktop")]
mod system;

pub use app::Controller;
pub use shared::error::{AppError, AppResult};

#[cfg(feature = "desktop")]
use std::sync::Arc;
#[cfg(feature = "desktop")]
use tauri::Manager;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::core::history::HistoryPoller;
    use crate::host::{register_with_retry, HttpHistorySource, ShortcutHandler};
    use crate::host::shortcut::MAX_REGISTER_ATTEMPTS;
    use crate::shared::settings::AppSettings;
    use crate::system::{TauriClipboard, TauriEvents, TauriShortcuts, TauriWindow};

    logging::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let settings = tauri::async_runtime::block_on(AppSettings::load())
                .unwrap_or_else(|e| {
                    tracing::error!("Failed to load settings: {}, using defaults", e);
                    AppSettings::default()
                });

            let handle = app.handle().clone();
            let controller = Arc::new(Controller::new(
                Arc::new(TauriWindow::new(handle.clone(), settings.window.label.clone())),
                Arc::new(TauriClipboard::new(handle.clone())),
                Arc::new(TauriEvents::new(handle.clone())),
                settings.window.clone(),
            ));
            app.manage(Arc::clone(&controller));

            // Periodic history refresh; the handle lives in app state so the
            // poller runs for the lifetime of the app
            let source = Arc::new(HttpHistorySource::new(&settings.host)?);
            tracing::info!("History source: {}", source.url());
            let (poller, poller_handle) = HistoryPoller::new(source, settings.refresh.interval());
            let sink = Arc::clone(&controller);
            tauri::async_runtime::spawn(poller.run(move |entries| sink.apply_history(entries)));
            app.manage(poller_handle);

            system::tray::create_tray(app)?;

            // Global shortcut toggles the quick access popup
            let accelerator = settings.hotkeys.toggle_window.clone();
            let toggle_target = Arc::clone(&controller);
            let handler: ShortcutHandler = Arc::new(move || {
                let controller = Arc::clone(&toggle_target);
                tauri::async_runtime::spawn(async move {
                    controller.toggle_window().await;
                });
            });
            let registrar = TauriShortcuts::new(handle.clone());
            tauri::async_runtime::spawn(async move {
                if register_with_retry(&registrar, &accelerator, handler, MAX_REGISTER_ATTEMPTS)
                    .await
                    .is_err()
                {
                    tracing::warn!("App will continue without global shortcut. Use the tray menu instead.");
                }
            });

            app.manage(settings);
            tracing::info!("Clipboard history client initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::view::get_view_state,
            api::commands::view::set_category,
            api::commands::view::set_search_term,
            api::commands::view::select_entry,
            api::commands::view::copy_entry,
            api::commands::window::handle_key,
            api::commands::window::show_compact,
            api::commands::window::hide_window,
            api::commands::window::toggle_window,
            api::commands::settings::get_settings,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            tracing::error!("Error while running tauri application: {}", e);
            std::process::exit(1);
        });
}
