//! CSV output writer.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::Record;
use crate::error::Result;

/// Column headers shared by both CSV entry points.
const HEADER: [&str; 4] = ["Author", "Timestamp", "Content", "Reactions"];

/// Renders records as a CSV table.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `Author`, `Timestamp`, `Content`, `Reactions`
/// - Timestamp: same human-readable format as the other renderers
/// - Encoding: UTF-8
///
/// An empty slice yields the header row only.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, records)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()))?;
    // The writer only ever receives UTF-8 strings
    let text = String::from_utf8(bytes).map_err(|e| io::Error::other(e.to_string()))?;
    Ok(text)
}

/// Renders records to a CSV file at `path`.
pub fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(writer: &mut csv::Writer<W>, records: &[Record]) -> Result<()> {
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(&[
            record.author().to_string(),
            record.format_timestamp(),
            record.content().to_string(),
            record.reactions(),
        ])?;
    }
    Ok(())
}
