//! Resilient decoding of chat log export files.
//!
//! Export files are frequently hand-edited or truncated mid-write, so a
//! strict JSON parse alone rejects too much real-world input. This module
//! runs an explicit ordered chain of parse strategies:
//!
//! 1. **Strict** — parse the input as a JSON array of records.
//! 2. **Strip trailing commas** — textually remove commas sitting directly
//!    before a closing `]` or `}`, then retry the strict parse.
//! 3. **Extract outer array** — take the substring between the first `[` and
//!    the last `]` and retry on that, recovering array payloads embedded in
//!    corrupt surrounding text.
//!
//! The chain is a best-effort heuristic aimed at known export corruption
//! patterns, not a general-purpose JSON fixer. If every strategy fails, or
//! the input decodes to an empty array, the whole decode fails with the
//! original strict-parse cause — a partial record list is never returned.
//!
//! # Example
//!
//! ```
//! use logweave::decode::decode_records;
//!
//! // A trailing comma before the closing bracket is repaired.
//! let records = decode_records(r#"[{"author":"Alice","content":"hi"},]"#).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].author(), "Alice");
//! ```

use std::fs;
use std::path::Path;

use crate::Record;
use crate::error::{LogweaveError, Result};

/// Reads and decodes one export file.
///
/// The whole file is loaded into memory; decode errors carry the file path.
pub fn decode_file(path: &Path) -> Result<Vec<Record>> {
    let raw = fs::read_to_string(path)?;
    decode_records(&raw).map_err(|e| e.with_path(path))
}

/// Decodes raw export text into records, repairing known corruption patterns.
///
/// See the module docs for the strategy chain. Fails if no strategy yields a
/// non-empty record array.
pub fn decode_records(raw: &str) -> Result<Vec<Record>> {
    let strict_err = match parse_strict(raw) {
        Ok(records) => return require_records(records),
        Err(e) => e,
    };

    let repaired = strip_trailing_commas(raw);
    if let Ok(records) = parse_strict(&repaired) {
        return require_records(records);
    }

    if let Some(slice) = extract_outer_array(&repaired) {
        if let Ok(records) = parse_strict(slice) {
            return require_records(records);
        }
    }

    Err(LogweaveError::decode(strict_err))
}

fn parse_strict(text: &str) -> std::result::Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(text.trim())
}

fn require_records(records: Vec<Record>) -> Result<Vec<Record>> {
    if records.is_empty() {
        return Err(LogweaveError::empty_input());
    }
    Ok(records)
}

/// Removes commas that sit directly before a closing `]` or `}`.
///
/// Whitespace between the comma and the delimiter is tolerated. The scan is
/// not string-aware; it only ever runs on input the strict parse already
/// rejected, where mangling a pathological string literal is an acceptable
/// trade for recovering the array.
fn strip_trailing_commas(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for (idx, ch) in raw.char_indices() {
        if ch == ',' {
            let rest = raw[idx + 1..].trim_start();
            if rest.starts_with(']') || rest.starts_with('}') {
                continue;
            }
        }
        out.push(ch);
    }

    out
}

/// Returns the substring spanning the outermost array delimiters, if any.
fn extract_outer_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
