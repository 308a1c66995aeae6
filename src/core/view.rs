//! Client view state
//!
//! Wires history -> filter -> navigation together with the window session.
//! Every input that changes the filtered sequence recomputes it once and
//! resets the navigation focus.

use std::sync::Arc;

use super::filter::{Category, FilterEngine};
use super::history::HistoryStore;
use super::navigation::{NavAction, NavigationController};
use super::session::{WindowMode, WindowSession};
use crate::shared::types::{ClipboardEntry, EntryDetail, EntryId, EntryView, ViewState};

#[derive(Debug, Default)]
pub struct ClipboardView {
    history: HistoryStore,
    filter: FilterEngine,
    navigation: NavigationController,
    session: WindowSession,
    filtered: Arc<Vec<ClipboardEntry>>,
    selected: Option<EntryId>,
}

impl ClipboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(&self) -> &[ClipboardEntry] {
        &self.filtered
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn mode(&self) -> WindowMode {
        self.session.mode()
    }

    pub fn category(&self) -> Category {
        self.filter.category()
    }

    pub fn search_term(&self) -> &str {
        self.filter.search_term()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.navigation.focused_index()
    }

    /// Returns true when the refresh published a new snapshot
    pub fn apply_history(&mut self, fetched: Vec<ClipboardEntry>) -> bool {
        if !self.history.apply(fetched) {
            return false;
        }
        self.refilter();
        true
    }

    pub fn set_category(&mut self, category: Category) {
        if self.filter.set_category(category) {
            self.refilter();
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        if self.filter.set_search_term(term) {
            self.refilter();
        }
    }

    /// Returns true when the mode changed
    pub fn enter_compact(&mut self) -> bool {
        if !self.session.enter_compact() {
            return false;
        }
        self.navigation.activate(self.filtered.len());
        true
    }

    /// Returns true when the mode changed
    pub fn exit_compact(&mut self) -> bool {
        if !self.session.exit_compact() {
            return false;
        }
        self.navigation.deactivate();
        true
    }

    pub fn handle_key(&mut self, key: &str) -> Option<NavAction> {
        self.navigation.handle_key(key, &self.filtered)
    }

    /// Select an entry for the detail pane; `None` clears the selection
    pub fn select(&mut self, id: Option<EntryId>) -> Option<EntryDetail> {
        self.selected = id.filter(|id| self.find(id).is_some());
        self.selected_detail()
    }

    pub fn find(&self, id: &EntryId) -> Option<&ClipboardEntry> {
        self.filtered.iter().find(|entry| &entry.id == id)
    }

    fn selected_detail(&self) -> Option<EntryDetail> {
        self.selected
            .as_ref()
            .and_then(|id| self.find(id))
            .map(EntryDetail::from)
    }

    fn refilter(&mut self) {
        self.filtered = Arc::new(self.filter.apply(self.history.entries()));
        self.navigation.reset(self.filtered.len());

        if let Some(id) = &self.selected {
            if self.find(id).is_none() {
                self.selected = None;
            }
        }
    }

    pub fn state(&self) -> ViewState {
        let mode = self.session.mode();
        ViewState {
            mode,
            category: self.filter.category(),
            search_term: self.filter.search_term().to_string(),
            entries: self
                .filtered
                .iter()
                .map(|entry| EntryView::from_entry(entry, mode))
                .collect(),
            focused_index: self.navigation.focused_index(),
            selected: self.selected_detail(),
            empty: self.filtered.is_empty(),
        }
    }
}
