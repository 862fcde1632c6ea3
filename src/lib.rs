//! # Logweave
//!
//! A Rust library for batch-converting chat log exports (JSON arrays of
//! message records) into human-readable HTML, Markdown, and CSV.
//!
//! ## Overview
//!
//! Logweave takes a directory of export files and, for each one, runs the
//! pipeline decode → filter → sort → render, producing three artifacts per
//! input. The pieces that make this practical on real-world exports:
//!
//! - **Resilient decoding** — trailing commas and corrupt surrounding text
//!   are repaired by an ordered chain of parse strategies before giving up.
//! - **Uniform filtering** — author, keyword, and date-range criteria
//!   evaluated by one pure predicate shared across all files.
//! - **Per-file isolation** — files are processed concurrently on a bounded
//!   worker pool, and one bad file is logged without aborting its siblings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logweave::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     // Decode one export, tolerating common corruption
//!     let records = decode_file(Path::new("exports/general.json"))?;
//!
//!     // Keep one author's messages, in chronological order
//!     let config = FilterConfig::new().with_author("alice");
//!     let mut records = apply_filters(records, &config);
//!     sort_by_timestamp(&mut records);
//!
//!     // Render all three artifacts
//!     write_html(&records, Path::new("general.html"), DEFAULT_CSS)?;
//!     write_markdown(&records, Path::new("general.md"))?;
//!     write_csv(&records, Path::new("general.csv"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Conversion
//!
//! ```rust,no_run
//! use logweave::batch::run_batch;
//! use logweave::core::filter::FilterConfig;
//! use logweave::discover::discover_json_files;
//! use logweave::progress::NoProgress;
//! use logweave::task::TaskContext;
//! use logweave::theme::DEFAULT_CSS;
//! use std::path::Path;
//!
//! # fn main() -> logweave::error::Result<()> {
//! let input_dir = Path::new("exports");
//! let files = discover_json_files(input_dir)?;
//!
//! let ctx = TaskContext {
//!     filter: FilterConfig::new(),
//!     css: DEFAULT_CSS.to_string(),
//!     output_dir: input_dir.join("output_logs"),
//! };
//!
//! let summary = run_batch(&files, &ctx, 4, &NoProgress)?;
//! println!("{} converted, {} failed", summary.converted(), summary.failed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`record`] — [`Record`], the decoded message type
//! - [`decode`] — resilient decoding ([`decode_file`](decode::decode_file),
//!   [`decode_records`](decode::decode_records))
//! - [`core`] — filtering, sorting, and the three renderers
//!   - [`core::filter`] — [`FilterConfig`](core::filter::FilterConfig), [`apply_filters`](core::filter::apply_filters)
//!   - [`core::processor`] — [`sort_by_timestamp`](core::processor::sort_by_timestamp)
//!   - [`core::output`] — `to_*` / `write_*` for HTML, Markdown, CSV
//! - [`format`] — [`RenderFormat`](format::RenderFormat) and renderer dispatch
//! - [`theme`] — built-in dark CSS theme and theme loading
//! - [`task`] — per-file task runner with failure isolation
//! - [`batch`] — bounded worker pool coordinator and shared error log
//! - [`discover`] — recursive input file discovery
//! - [`progress`] — injected progress observer
//! - [`cli`] — CLI types (requires the `cli` feature)
//! - [`error`] — unified error types ([`LogweaveError`], [`Result`](error::Result))
//! - [`prelude`] — convenient re-exports

pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod decode;
pub mod discover;
pub mod error;
pub mod format;
pub mod progress;
pub mod record;
pub mod task;
pub mod theme;

// Re-export the main types at the crate root for convenience
pub use error::{LogweaveError, Result};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use logweave::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::Record;

    // Error types
    pub use crate::error::{LogweaveError, Result};

    // Decoding
    pub use crate::decode::{decode_file, decode_records};

    // Filtering and ordering
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::processor::sort_by_timestamp;

    // Output (file writers and string converters)
    pub use crate::core::output::{
        to_csv, to_html, to_markdown, write_csv, write_html, write_markdown,
    };
    pub use crate::format::{RenderFormat, render_to_string};

    // Theme
    pub use crate::theme::{DEFAULT_CSS, load_theme};

    // Batch processing
    pub use crate::batch::{BatchSummary, ErrorLog, run_batch};
    pub use crate::discover::discover_json_files;
    pub use crate::progress::{ConsoleProgress, NoProgress, ProgressObserver};
    pub use crate::task::{TaskContext, TaskOutcome, process_file, run_task};
}
