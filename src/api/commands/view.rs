//! History view command module

use std::sync::Arc;
use tauri::State;

use crate::app::Controller;
use crate::core::filter::Category;
use crate::shared::error::AppResult;
use crate::shared::types::{EntryDetail, EntryId, ViewState};

/// Current list, filter inputs and focus
#[tauri::command]
pub fn get_view_state(controller: State<'_, Arc<Controller>>) -> ViewState {
    controller.state()
}

#[tauri::command]
pub fn set_category(controller: State<'_, Arc<Controller>>, category: String) -> AppResult<ViewState> {
    let category = category.parse::<Category>()?;
    Ok(controller.set_category(category))
}

#[tauri::command]
pub fn set_search_term(controller: State<'_, Arc<Controller>>, term: String) -> ViewState {
    controller.set_search_term(term)
}

/// Show an entry in the detail pane; `None` clears it
#[tauri::command]
pub fn select_entry(controller: State<'_, Arc<Controller>>, id: Option<String>) -> Option<EntryDetail> {
    controller.select_entry(id.map(EntryId::new))
}

/// Copy an entry's content back to the system clipboard
#[tauri::command]
pub fn copy_entry(controller: State<'_, Arc<Controller>>, id: String) -> bool {
    controller.copy_entry(&EntryId::new(id))
}
