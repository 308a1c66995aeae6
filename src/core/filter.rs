//! History filtering
//!
//! Derives the visible sequence from the stored history, a category tab and a
//! free-text search term. Filtering is pure and keeps the source order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::error::AppError;
use crate::shared::types::{ClipboardEntry, ContentType};

/// Category tab selected in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    All,
    Text,
    Url,
    Code,
}

impl Category {
    pub fn matches(self, content_type: ContentType) -> bool {
        match self {
            Category::All => true,
            Category::Text => content_type == ContentType::Text,
            Category::Url => content_type == ContentType::Url,
            Category::Code => content_type == ContentType::Code,
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Category::All),
            "Text" => Ok(Category::Text),
            "Url" => Ok(Category::Url),
            "Code" => Ok(Category::Code),
            other => Err(AppError::Validation(format!("Unknown category: {}", other))),
        }
    }
}

/// Filter `entries` by category and case-insensitive substring match on content
pub fn filter_entries(entries: &[ClipboardEntry], category: Category, search_term: &str) -> Vec<ClipboardEntry> {
    let needle = search_term.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_entry(entry, category, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased
fn matches_entry(entry: &ClipboardEntry, category: Category, needle: &str) -> bool {
    category.matches(entry.content_type)
        && (needle.is_empty() || entry.content.to_lowercase().contains(needle))
}

/// Holds the current category and search term
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    category: Category,
    search_term: String,
    needle: String,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns true when the filter inputs changed
    pub fn set_category(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    /// Returns true when the filter inputs changed
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.search_term == term {
            return false;
        }
        self.needle = term.to_lowercase();
        self.search_term = term;
        true
    }

    pub fn apply(&self, entries: &[ClipboardEntry]) -> Vec<ClipboardEntry> {
        entries
            .iter()
            .filter(|entry| matches_entry(entry, self.category, &self.needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make(id: &str, content: &str, content_type: ContentType) -> ClipboardEntry {
        ClipboardEntry::new(id, content, content_type, Utc::now())
    }

    fn sample() -> Vec<ClipboardEntry> {
        vec![
            make("1", "hello world", ContentType::Text),
            make("2", "https://x.com", ContentType::Url),
            make("3", "fn main() { println!(\"Hello\") }", ContentType::Code),
            make("4", "HTTPS://EXAMPLE.ORG/Hello", ContentType::Url),
            make("5", "grocery list", ContentType::Text),
        ]
    }

    fn ids(entries: &[ClipboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_category_only() {
        let entries = sample();
        for category in [Category::Text, Category::Url, Category::Code] {
            let filtered = filter_entries(&entries, category, "");
            assert!(!filtered.is_empty());
            assert!(filtered.iter().all(|e| category.matches(e.content_type)));
        }
        assert_eq!(ids(&filter_entries(&entries, Category::Url, "")), vec!["2", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let entries = sample();
        let filtered = filter_entries(&entries, Category::All, "HeLLo");
        assert_eq!(ids(&filtered), vec!["1", "3", "4"]);
        assert!(filtered.iter().all(|e| e.content.to_lowercase().contains("hello")));
    }

    #[test]
    fn test_category_and_search_combine() {
        let entries = sample();
        assert_eq!(ids(&filter_entries(&entries, Category::Url, "example")), vec!["4"]);
        assert!(filter_entries(&entries, Category::Code, "grocery").is_empty());
    }

    #[test]
    fn test_empty_term_and_all_is_identity() {
        let entries = sample();
        assert_eq!(filter_entries(&entries, Category::All, ""), entries);
        assert!(filter_entries(&[], Category::All, "x").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let entries = sample();
        for (category, term) in [(Category::All, "h"), (Category::Url, "https"), (Category::Text, "")] {
            let once = filter_entries(&entries, category, term);
            let twice = filter_entries(&once, category, term);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let entries = sample();
        let filtered = filter_entries(&entries, Category::All, "o");
        let mut cursor = entries.iter();
        for kept in &filtered {
            assert!(cursor.any(|e| e == kept), "entry {} out of order", kept.id);
        }
    }

    #[test]
    fn test_engine_reports_changes() {
        let mut engine = FilterEngine::new();
        assert!(!engine.set_category(Category::All));
        assert!(engine.set_category(Category::Url));
        assert!(!engine.set_search_term(""));
        assert!(engine.set_search_term("X.COM"));
        assert!(!engine.set_search_term("X.COM"));

        assert_eq!(ids(&engine.apply(&sample())), vec!["2"]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Code".parse::<Category>().ok(), Some(Category::Code));
        assert!("code".parse::<Category>().is_err());
    }
}
