//! CSS themes for the HTML renderer.
//!
//! HTML output always carries a stylesheet: either one supplied by the user
//! or the built-in dark theme below. A document with no styling at all is
//! not a valid outcome.

use std::fs;
use std::path::Path;

/// Built-in dark theme used when no external stylesheet is supplied.
///
/// Dark page, light text, bordered rounded message cards, gold author label,
/// muted small timestamp, italic muted reactions line.
pub const DEFAULT_CSS: &str = "\
body {
    font-family: Arial, sans-serif;
    background-color: #121212;
    color: #E0E0E0;
    padding: 20px;
    line-height: 1.6;
}
.message {
    border: 1px solid #333;
    border-radius: 8px;
    margin-bottom: 15px;
    padding: 15px;
    background-color: #1E1E1E;
}
.author {
    font-weight: bold;
    color: #FFD700;
}
.timestamp {
    color: #999;
    font-size: 0.85em;
}
.content {
    margin-top: 10px;
}
.reactions {
    font-style: italic;
    color: #8FBC8F;
    margin-top: 5px;
}
";

/// Loads the theme to use for HTML output.
///
/// Reads `css_file` when given and readable; any read failure (missing file,
/// permissions) falls back to [`DEFAULT_CSS`] rather than erroring, so HTML
/// output is never left unstyled.
pub fn load_theme(css_file: Option<&Path>) -> String {
    css_file
        .and_then(|path| fs::read_to_string(path).ok())
        .unwrap_or_else(|| DEFAULT_CSS.to_string())
}
