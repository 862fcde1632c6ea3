//! Filter records by author, keyword, and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering record collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Author | [`with_author`](FilterConfig::with_author) | Case-insensitive exact author match |
//! | Keyword | [`with_keyword`](FilterConfig::with_keyword) | Case-insensitive substring match on content |
//! | Start date | [`with_start_date`](FilterConfig::with_start_date) | Records on or after date |
//! | End date | [`with_end_date`](FilterConfig::with_end_date) | Records on or before date midnight |
//!
//! # Examples
//!
//! ## Filter by Author
//!
//! ```
//! use logweave::core::filter::{FilterConfig, apply_filters};
//! use logweave::Record;
//!
//! let records = vec![
//!     Record::new("Alice", "Hello"),
//!     Record::new("Bob", "Hi there"),
//!     Record::new("ALICE", "How are you?"),
//! ];
//!
//! // Case-insensitive author matching
//! let config = FilterConfig::new().with_author("alice");
//! let filtered = apply_filters(records, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use logweave::core::filter::{FilterConfig, apply_filters};
//! use logweave::Record;
//!
//! # fn main() -> logweave::error::Result<()> {
//! let records = vec![
//!     Record::new("Alice", "Old").with_timestamp_ms(1_500_000_000_000),
//!     Record::new("Alice", "New").with_timestamp_ms(1_700_000_000_000),
//! ];
//!
//! let config = FilterConfig::new().with_start_date("2023-01-01")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - All active criteria combine with AND logic
//! - Records missing author or content compare as empty strings, never as
//!   automatic rejections
//! - Records missing a timestamp compare as the epoch, so date filters treat
//!   them as the earliest possible messages
//! - The end date bounds at that day's midnight, so messages sent during the
//!   end day fall outside the range

use chrono::{DateTime, NaiveDate, Utc};

use crate::Record;
use crate::error::{LogweaveError, Result};

/// Configuration for filtering records.
///
/// Four independent optional criteria; a record must match every active one
/// to pass. Constructed once per run and shared read-only across all
/// concurrent tasks.
///
/// # Examples
///
/// ```
/// use logweave::core::filter::FilterConfig;
///
/// # fn main() -> logweave::error::Result<()> {
/// // Author only
/// let by_author = FilterConfig::new().with_author("Alice");
///
/// // Date range
/// let by_date = FilterConfig::new()
///     .with_start_date("2024-01-01")?
///     .with_end_date("2024-12-31")?;
///
/// // Combined
/// let combined = FilterConfig::new()
///     .with_author("Alice")
///     .with_keyword("deploy")
///     .with_start_date("2024-06-01")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records from this author, stored lowercased.
    pub author: Option<String>,

    /// Include only records whose content contains this text, stored lowercased.
    pub keyword: Option<String>,

    /// Include only records on or after this timestamp.
    pub start_date: Option<DateTime<Utc>>,

    /// Include only records on or before this timestamp.
    pub end_date: Option<DateTime<Utc>>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No criteria are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author filter.
    ///
    /// The value is lowercased here, once; matching compares the lowercased
    /// record author for an exact match.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into().to_lowercase());
        self
    }

    /// Sets the keyword filter.
    ///
    /// The value is lowercased here, once; matching searches the lowercased
    /// record content for it as a substring.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into().to_lowercase());
        self
    }

    /// Sets the start date filter (inclusive), format `YYYY-MM-DD`.
    ///
    /// The bound is that day's midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [`LogweaveError::InvalidDate`] if the format is invalid.
    pub fn with_start_date(mut self, date_str: &str) -> Result<Self> {
        self.start_date = Some(parse_date_midnight(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive), format `YYYY-MM-DD`.
    ///
    /// The bound is that day's midnight UTC, so records timestamped later in
    /// the end day fall outside the range.
    ///
    /// # Errors
    ///
    /// Returns [`LogweaveError::InvalidDate`] if the format is invalid.
    pub fn with_end_date(mut self, date_str: &str) -> Result<Self> {
        self.end_date = Some(parse_date_midnight(date_str)?);
        Ok(self)
    }

    /// Returns `true` if any criterion is active.
    pub fn is_active(&self) -> bool {
        self.author.is_some()
            || self.keyword.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
    }

    /// Returns `true` if the record passes every active criterion.
    ///
    /// Pure function over the record; absent fields resolve to their
    /// documented defaults before comparison, so a sparse record can never
    /// make this panic or error.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(ref author) = self.author {
            // Comparison sees the raw field: a record with no author can
            // only match an empty author filter, not the render sentinel.
            let record_author = record.author.as_deref().unwrap_or("");
            if record_author.to_lowercase() != *author {
                return false;
            }
        }

        if let Some(ref keyword) = self.keyword {
            if !record.content().to_lowercase().contains(keyword.as_str()) {
                return false;
            }
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            let ts = record.datetime();
            if self.start_date.is_some_and(|start| ts < start) {
                return false;
            }
            if self.end_date.is_some_and(|end| ts > end) {
                return false;
            }
        }

        true
    }
}

/// Parse a date string in YYYY-MM-DD format to `DateTime<Utc>` at midnight.
fn parse_date_midnight(date_str: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| LogweaveError::invalid_date(date_str))?;

    // Midnight is always a valid time of day
    Ok(naive.and_hms_opt(0, 0, 0).unwrap().and_utc())
}

/// Filters a collection of records based on the provided configuration.
///
/// Returns a new vector containing only records that match all active
/// criteria, keeping their relative order. If no criteria are active, returns
/// the input unchanged. Filtering an already-filtered sequence with the same
/// configuration is a no-op.
///
/// # Examples
///
/// ```
/// use logweave::core::filter::{FilterConfig, apply_filters};
/// use logweave::Record;
///
/// let records = vec![
///     Record::new("Alice", "Hello"),
///     Record::new("Bob", "Hi"),
///     Record::new("Alice", "Goodbye"),
/// ];
///
/// let config = FilterConfig::new().with_author("Alice");
/// let filtered = apply_filters(records, &config);
///
/// assert_eq!(filtered.len(), 2);
/// ```
pub fn apply_filters(records: Vec<Record>, config: &FilterConfig) -> Vec<Record> {
    if !config.is_active() {
        return records;
    }

    records.into_iter().filter(|r| config.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(author: &str, content: &str, ts_ms: Option<i64>) -> Record {
        let mut record = Record::new(author, content);
        record.timestamp = ts_ms;
        record
    }

    // 2024-06-15 12:00:00 UTC in epoch milliseconds
    const JUNE_15_NOON: i64 = 1_718_452_800_000;
    // 2024-01-01 12:00:00 UTC
    const JAN_1_NOON: i64 = 1_704_110_400_000;

    #[test]
    fn test_author_match_case_insensitive() {
        let records = vec![
            rec("Alice", "Hello", None),
            rec("Bob", "Hi", None),
            rec("ALICE", "Bye", None),
        ];

        let config = FilterConfig::new().with_author("alice");
        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.author().eq_ignore_ascii_case("alice")));
    }

    #[test]
    fn test_author_exact_not_substring() {
        let records = vec![rec("Alice", "Hello", None), rec("Alicette", "Hi", None)];
        let config = FilterConfig::new().with_author("Alice");
        assert_eq!(apply_filters(records, &config).len(), 1);
    }

    #[test]
    fn test_keyword_substring_case_insensitive() {
        let records = vec![
            rec("Alice", "Deploy finished", None),
            rec("Bob", "lunch?", None),
            rec("Carol", "redeploying now", None),
        ];

        let config = FilterConfig::new().with_keyword("DEPLOY");
        assert_eq!(apply_filters(records, &config).len(), 2);
    }

    #[test]
    fn test_start_date_inclusive() {
        let records = vec![
            rec("Alice", "Old", Some(JAN_1_NOON)),
            rec("Alice", "New", Some(JUNE_15_NOON)),
        ];

        let config = FilterConfig::new().with_start_date("2024-06-01").unwrap();
        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content(), "New");
    }

    #[test]
    fn test_end_date_bounds_at_midnight() {
        let records = vec![
            rec("Alice", "Old", Some(JAN_1_NOON)),
            rec("Alice", "New", Some(JUNE_15_NOON)),
        ];

        // Noon on the end day itself is past midnight and excluded.
        let config = FilterConfig::new().with_end_date("2024-06-15").unwrap();
        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content(), "Old");
    }

    #[test]
    fn test_record_exactly_at_midnight_passes_both_bounds() {
        // 2024-06-15 00:00:00 UTC
        let midnight = 1_718_409_600_000;
        let records = vec![rec("Alice", "edge", Some(midnight))];

        let config = FilterConfig::new()
            .with_start_date("2024-06-15")
            .unwrap()
            .with_end_date("2024-06-15")
            .unwrap();

        assert_eq!(apply_filters(records, &config).len(), 1);
    }

    #[test]
    fn test_missing_timestamp_compares_as_epoch() {
        let records = vec![
            rec("Alice", "dated", Some(JUNE_15_NOON)),
            rec("Alice", "undated", None),
        ];

        // Epoch is before any modern start date, so the undated record drops.
        let config = FilterConfig::new().with_start_date("2024-01-01").unwrap();
        let filtered = apply_filters(records.clone(), &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content(), "dated");

        // And survives an end-date-only filter.
        let config = FilterConfig::new().with_end_date("2024-12-31").unwrap();
        assert_eq!(apply_filters(records, &config).len(), 2);
    }

    #[test]
    fn test_missing_author_compares_as_empty_string() {
        let sparse = Record {
            content: Some("hello".into()),
            ..Record::default()
        };

        assert!(FilterConfig::new().with_author("").matches(&sparse));
        assert!(!FilterConfig::new().with_author("unknown").matches(&sparse));
        assert!(!FilterConfig::new().with_author("alice").matches(&sparse));
    }

    #[test]
    fn test_missing_content_compares_as_empty() {
        let sparse = Record::default();

        assert!(!FilterConfig::new().with_keyword("hello").matches(&sparse));
        // An empty keyword is a substring of anything, including nothing.
        assert!(FilterConfig::new().with_keyword("").matches(&sparse));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_start_date("01-01-2024");
        assert!(matches!(result, Err(LogweaveError::InvalidDate { .. })));
    }

    #[test]
    fn test_combined_filters() {
        let records = vec![
            rec("Alice", "old deploy", Some(JAN_1_NOON)),
            rec("Alice", "new deploy", Some(JUNE_15_NOON)),
            rec("Bob", "new deploy", Some(JUNE_15_NOON)),
            rec("Alice", "new lunch", Some(JUNE_15_NOON)),
        ];

        let config = FilterConfig::new()
            .with_author("alice")
            .with_keyword("deploy")
            .with_start_date("2024-06-01")
            .unwrap();

        let filtered = apply_filters(records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content(), "new deploy");
    }

    #[test]
    fn test_inactive_config_passes_everything() {
        let records = vec![rec("Alice", "a", None), rec("Bob", "b", None)];
        let config = FilterConfig::new();
        assert!(!config.is_active());
        assert_eq!(apply_filters(records.clone(), &config), records);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = vec![
            rec("Alice", "keep", Some(JUNE_15_NOON)),
            rec("Bob", "drop", Some(JUNE_15_NOON)),
            rec("Alice", "keep too", Some(JAN_1_NOON)),
        ];

        let config = FilterConfig::new().with_author("alice");
        let once = apply_filters(records, &config);
        let twice = apply_filters(once.clone(), &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_author("a").is_active());
        assert!(FilterConfig::new().with_keyword("k").is_active());
        assert!(
            FilterConfig::new()
                .with_start_date("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
