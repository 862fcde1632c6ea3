//! Unified error types for logweave.
//!
//! This module provides a single [`LogweaveError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for logweave operations.
///
/// # Example
///
/// ```rust
/// use logweave::error::Result;
/// use logweave::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, LogweaveError>;

/// The error type for all logweave operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogweaveError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes could not be decoded as a record array, even after the
    /// repair heuristics ran.
    ///
    /// Carries the original strict-parse cause and, when known, the file
    /// the bytes came from.
    #[error("Failed to decode chat log{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Decode {
        /// The underlying decode failure
        #[source]
        source: DecodeErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV rendering error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error outside the decode chain.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of decode failures.
#[derive(Debug, Error)]
pub enum DecodeErrorKind {
    /// No parse strategy succeeded; holds the strict-parse error.
    #[error("{0}")]
    Json(#[source] serde_json::Error),

    /// The input parsed to an array with no records in it.
    #[error("input contains no records")]
    Empty,
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl LogweaveError {
    /// Creates a decode error from the strict-parse cause.
    pub fn decode(source: serde_json::Error) -> Self {
        LogweaveError::Decode {
            source: DecodeErrorKind::Json(source),
            path: None,
        }
    }

    /// Creates a decode error for an input with no records.
    pub fn empty_input() -> Self {
        LogweaveError::Decode {
            source: DecodeErrorKind::Empty,
            path: None,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        LogweaveError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Attaches a file path to a decode error; other variants pass through.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            LogweaveError::Decode { source, .. } => LogweaveError::Decode {
                source,
                path: Some(path.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, LogweaveError::Io(_))
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, LogweaveError::Decode { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, LogweaveError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
