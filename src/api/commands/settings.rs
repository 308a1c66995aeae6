use tauri::State;

use crate::shared::settings::AppSettings;

#[tauri::command]
pub fn get_settings(settings: State<'_, AppSettings>) -> AppSettings {
    settings.inner().clone()
}
