//! Post-filter record processing.
//!
//! Filtered records are sorted chronologically before rendering so that all
//! three output formats agree on ordering.

use crate::Record;

/// Sorts records by timestamp ascending, missing timestamps first.
///
/// The sort is stable: records sharing a timestamp keep their original
/// relative order, and sorting an already-sorted slice is a no-op. Records
/// without a timestamp sort as the epoch (earliest).
///
/// # Example
///
/// ```
/// use logweave::core::processor::sort_by_timestamp;
/// use logweave::Record;
///
/// let mut records = vec![
///     Record::new("Bob", "second").with_timestamp_ms(2000),
///     Record::new("Alice", "first").with_timestamp_ms(1000),
/// ];
/// sort_by_timestamp(&mut records);
/// assert_eq!(records[0].content(), "first");
/// ```
pub fn sort_by_timestamp(records: &mut [Record]) {
    records.sort_by_key(Record::timestamp_ms);
}
