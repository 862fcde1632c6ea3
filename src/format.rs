//! Output format types for the logweave library.
//!
//! Every input file is rendered once per [`RenderFormat`]; the enum drives
//! both output file naming and renderer dispatch.
//!
//! # Example
//!
//! ```rust
//! use logweave::format::{RenderFormat, render_to_string};
//! use logweave::theme::DEFAULT_CSS;
//! use logweave::Record;
//!
//! # fn main() -> logweave::error::Result<()> {
//! let records = vec![Record::new("Alice", "Hello!")];
//!
//! for format in RenderFormat::all() {
//!     let artifact = render_to_string(&records, *format, DEFAULT_CSS)?;
//!     assert!(artifact.contains("Alice"));
//! }
//! # Ok(())
//! # }
//! ```

use crate::Record;
use crate::core::output::{to_csv, to_html, to_markdown};
use crate::error::Result;

/// The three output formats produced for every input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RenderFormat {
    /// Styled HTML document
    Html,

    /// Markdown document
    Markdown,

    /// CSV table
    Csv,
}

impl RenderFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use logweave::format::RenderFormat;
    ///
    /// assert_eq!(RenderFormat::Html.extension(), "html");
    /// assert_eq!(RenderFormat::Markdown.extension(), "md");
    /// assert_eq!(RenderFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Html => "html",
            RenderFormat::Markdown => "md",
            RenderFormat::Csv => "csv",
        }
    }

    /// Returns all formats, in the order artifacts are written.
    pub fn all() -> &'static [RenderFormat] {
        &[RenderFormat::Html, RenderFormat::Markdown, RenderFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            RenderFormat::Html => "text/html",
            RenderFormat::Markdown => "text/markdown",
            RenderFormat::Csv => "text/csv",
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Html => write!(f, "HTML"),
            RenderFormat::Markdown => write!(f, "Markdown"),
            RenderFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Renders records to a string in the specified format.
///
/// `css` is only consulted for HTML output.
pub fn render_to_string(records: &[Record], format: RenderFormat, css: &str) -> Result<String> {
    match format {
        RenderFormat::Html => Ok(to_html(records, css)),
        RenderFormat::Markdown => Ok(to_markdown(records)),
        RenderFormat::Csv => to_csv(records),
    }
}
