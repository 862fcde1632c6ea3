//! Input file discovery.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Recursively collects files with a `json` extension under `dir`.
///
/// The extension match is case-insensitive; unreadable subtrees are skipped.
/// Results are sorted so batch assignment order is deterministic.
///
/// # Errors
///
/// Fails if `dir` does not exist or is not a directory.
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("input directory not found: {}", dir.display()),
        )
        .into());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    Ok(files)
}
