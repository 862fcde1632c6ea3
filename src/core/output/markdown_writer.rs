//! Markdown output writer.

use std::fs;
use std::path::Path;

use crate::Record;
use crate::error::Result;

/// Renders records as a Markdown document.
///
/// Each record becomes one blank-line-separated paragraph:
///
/// ```text
/// **Author** (2024-06-15 12:00:00):
/// message content
/// _Reactions_: 👍2
/// ```
///
/// An empty slice yields an empty document.
pub fn to_markdown(records: &[Record]) -> String {
    let mut md = String::with_capacity(records.len() * 96);

    for record in records {
        md.push_str(&format!(
            "**{}** ({}):\n",
            record.author(),
            record.format_timestamp()
        ));
        md.push_str(record.content());
        md.push('\n');
        md.push_str(&format!("_Reactions_: {}\n\n", record.reactions()));
    }

    md
}

/// Renders records to a Markdown file at `path`.
pub fn write_markdown(records: &[Record], path: &Path) -> Result<()> {
    fs::write(path, to_markdown(records))?;
    Ok(())
}
