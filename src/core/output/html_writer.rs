//! HTML output writer.
//!
//! Known limitation: record content is emitted verbatim, without HTML
//! escaping. Input must be trusted or pre-sanitized; a record containing
//! markup will render as markup.

use std::fs;
use std::path::Path;

use crate::Record;
use crate::error::Result;

/// Renders records as a styled HTML document.
///
/// The supplied CSS is inlined into a `<style>` block; each record becomes a
/// `message` block with `author`, `timestamp`, `content`, and `reactions`
/// divs, in that order. An empty slice yields a document with no message
/// blocks.
pub fn to_html(records: &[Record], css: &str) -> String {
    let mut html = String::with_capacity(256 + css.len() + records.len() * 160);

    html.push_str("<html><head><style>");
    html.push_str(css);
    html.push_str("</style></head><body>");

    for record in records {
        html.push_str(&format!(
            r#"
<div class="message">
  <div class="author">{}</div>
  <div class="timestamp">{}</div>
  <div class="content">{}</div>
  <div class="reactions">{}</div>
</div>"#,
            record.author(),
            record.format_timestamp(),
            record.content(),
            record.reactions()
        ));
    }

    html.push_str("\n</body></html>");
    html
}

/// Renders records to an HTML file at `path`.
pub fn write_html(records: &[Record], path: &Path, css: &str) -> Result<()> {
    fs::write(path, to_html(records, css))?;
    Ok(())
}
