//! Output format writers.
//!
//! This module provides writers for the three output formats:
//! - [`write_html`] / [`to_html`] - styled HTML document
//! - [`write_markdown`] / [`to_markdown`] - Markdown document
//! - [`write_csv`] / [`to_csv`] - CSV table
//!
//! All three writers take the same sorted record slice and emit the same
//! record set in the same order; only the framing differs. Each renders an
//! empty artifact (wrapper or header only) for an empty slice.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> logweave::error::Result<()> {
//! use std::path::Path;
//!
//! use logweave::core::output::{write_csv, write_html, write_markdown};
//! use logweave::theme::DEFAULT_CSS;
//! use logweave::Record;
//!
//! let records = vec![
//!     Record::new("Alice", "Hello!"),
//!     Record::new("Bob", "Hi there!"),
//! ];
//!
//! write_html(&records, Path::new("chat.html"), DEFAULT_CSS)?;
//! write_markdown(&records, Path::new("chat.md"))?;
//! write_csv(&records, Path::new("chat.csv"))?;
//! # Ok(())
//! # }
//! ```

mod csv_writer;
mod html_writer;
mod markdown_writer;

pub use csv_writer::{to_csv, write_csv};
pub use html_writer::{to_html, write_html};
pub use markdown_writer::{to_markdown, write_markdown};
