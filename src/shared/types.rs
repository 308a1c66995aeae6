use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::core::filter::Category;
use crate::core::session::WindowMode;

/// Preview length (in characters) for the compact popup list
pub const COMPACT_PREVIEW_CHARS: usize = 50;
/// Preview length (in characters) for the full window sidebar
pub const FULL_PREVIEW_CHARS: usize = 30;

/// Opaque entry identifier assigned by the host.
///
/// The host may send either a JSON string or an integer; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EntryId(s),
            RawId::Unsigned(n) => EntryId(n.to_string()),
            RawId::Signed(n) => EntryId(n.to_string()),
        })
    }
}

/// Classification assigned by the host at capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Text,
    Url,
    Code,
}

/// A single captured clipboard record, as delivered by the host.
///
/// Entries are read-only snapshots: the client never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: EntryId,
    pub content: String,
    pub content_type: ContentType,
    #[serde(deserialize_with = "deserialize_create_time")]
    pub create_time: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ClipboardEntry {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
        create_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntryId::new(id),
            content: content.into(),
            content_type,
            create_time,
            tags: Vec::new(),
        }
    }
}

/// Accepts epoch milliseconds (number or numeric string) or an RFC 3339 string.
fn deserialize_create_time<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTime {
        Millis(i64),
        Float(f64),
        Text(String),
    }

    let millis = match RawTime::deserialize(deserializer)? {
        RawTime::Millis(ms) => ms,
        RawTime::Float(ms) => ms as i64,
        RawTime::Text(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(ms) => ms,
                Err(_) => {
                    return DateTime::parse_from_rfc3339(text)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(|e| {
                            serde::de::Error::custom(format!("invalid create_time '{}': {}", text, e))
                        });
                }
            }
        }
    };

    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| serde::de::Error::custom(format!("create_time out of range: {}", millis)))
}

/// Row shown in the history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub id: EntryId,
    pub content_type: ContentType,
    pub preview: String,
    pub created_at: String,
    pub tags: Vec<String>,
}

impl EntryView {
    pub fn from_entry(entry: &ClipboardEntry, mode: WindowMode) -> Self {
        let limit = match mode {
            WindowMode::Compact => COMPACT_PREVIEW_CHARS,
            WindowMode::Full => FULL_PREVIEW_CHARS,
        };

        Self {
            id: entry.id.clone(),
            content_type: entry.content_type,
            preview: preview(&entry.content, limit),
            created_at: format_time(&entry.create_time),
            tags: entry.tags.clone(),
        }
    }
}

/// Detail pane for the selected entry in the full window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDetail {
    pub id: EntryId,
    pub content_type: ContentType,
    pub content: String,
    pub created_at: String,
    pub tags: Vec<String>,
}

impl From<&ClipboardEntry> for EntryDetail {
    fn from(entry: &ClipboardEntry) -> Self {
        Self {
            id: entry.id.clone(),
            content_type: entry.content_type,
            content: entry.content.clone(),
            created_at: format_time(&entry.create_time),
            tags: entry.tags.clone(),
        }
    }
}

/// Everything the web view needs to render one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub mode: WindowMode,
    pub category: Category,
    pub search_term: String,
    pub entries: Vec<EntryView>,
    pub focused_index: Option<usize>,
    pub selected: Option<EntryDetail>,
    /// Drives the "no matching records" placeholder
    pub empty: bool,
}

/// Toast payload surfaced after a copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn copied() -> Self {
        Self {
            title: "Copied to clipboard".to_string(),
            description: "Content has been successfully copied to your clipboard".to_string(),
            duration_ms: 2000,
        }
    }
}

/// Truncate to `limit` characters, appending an ellipsis only when cut
pub fn preview(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
        None => content.to_string(),
    }
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
