//! The decoded chat message record.
//!
//! This module provides [`Record`], the normalized representation of one chat
//! message as found in a JSON export. Every field is optional in the wire
//! format; defaults are documented here and resolved at read time through the
//! accessor methods, so later pipeline stages never branch on absence.
//!
//! # Overview
//!
//! A record consists of:
//! - `author` — display name, defaults to `"Unknown"`
//! - `timestamp` — epoch milliseconds, defaults to `0`
//! - `content` — message text, defaults to `""`
//! - `reaction_counts` — opaque reactions payload, rendered verbatim
//!
//! # Examples
//!
//! ```
//! use logweave::Record;
//!
//! let rec = Record::new("Alice", "Hello, world!");
//! assert_eq!(rec.author(), "Alice");
//! assert_eq!(rec.content(), "Hello, world!");
//!
//! // Absent fields resolve to their documented defaults.
//! let empty = Record::default();
//! assert_eq!(empty.author(), "Unknown");
//! assert_eq!(empty.timestamp_ms(), 0);
//! assert_eq!(empty.content(), "");
//! assert_eq!(empty.reactions(), "");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel author used when the export omits the field.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Timestamp format shared by all renderers.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One chat message as decoded from a JSON export.
///
/// Records are immutable once decoded and compared structurally. Unknown
/// fields in the input are ignored; known fields that are absent deserialize
/// to `None` and resolve to their defaults through the accessors.
///
/// # Fields
///
/// | Field | Wire type | Default |
/// |-------|-----------|---------|
/// | `author` | string | `"Unknown"` |
/// | `timestamp` | integer milliseconds since epoch | `0` |
/// | `content` | string | `""` |
/// | `reaction_counts` | any JSON value | empty |
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the message author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// When the message was sent, in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Text content of the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Reactions payload, kept opaque and rendered verbatim.
    ///
    /// Exports disagree on the shape of this field (a summary string, a
    /// count map, a list), so no structure is imposed on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_counts: Option<Value>,
}

impl Record {
    /// Creates a record with an author and content, no timestamp or reactions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logweave::Record;
    ///
    /// let rec = Record::new("Alice", "Hello!");
    /// assert_eq!(rec.author(), "Alice");
    /// assert!(rec.timestamp.is_none());
    /// ```
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            timestamp: None,
            content: Some(content.into()),
            reaction_counts: None,
        }
    }

    /// Builder method to set the timestamp in epoch milliseconds.
    #[must_use]
    pub fn with_timestamp_ms(mut self, ms: i64) -> Self {
        self.timestamp = Some(ms);
        self
    }

    /// Builder method to set the reactions payload.
    #[must_use]
    pub fn with_reactions(mut self, reactions: Value) -> Self {
        self.reaction_counts = Some(reactions);
        self
    }

    /// Returns the author, or `"Unknown"` when absent.
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Returns the timestamp in epoch milliseconds, or `0` when absent.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp.unwrap_or(0)
    }

    /// Returns the calendar timestamp derived from [`timestamp_ms`](Self::timestamp_ms).
    ///
    /// Milliseconds are divided down to whole seconds. Out-of-range values
    /// clamp to the epoch rather than failing.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp_ms() / 1000, 0).unwrap_or_default()
    }

    /// Returns the derived timestamp as a human-readable date-time string.
    ///
    /// All renderers share this format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logweave::Record;
    ///
    /// let rec = Record::new("Alice", "hi").with_timestamp_ms(1_700_000_000_000);
    /// assert_eq!(rec.format_timestamp(), "2023-11-14 22:13:20");
    /// ```
    pub fn format_timestamp(&self) -> String {
        self.datetime().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Returns the message content, or `""` when absent.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Returns the reactions payload rendered verbatim.
    ///
    /// JSON strings render bare (no quotes); any other value renders as
    /// compact JSON; absent or null renders empty.
    pub fn reactions(&self) -> String {
        match &self.reaction_counts {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
