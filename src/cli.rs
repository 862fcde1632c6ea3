//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::batch::DEFAULT_THREADS;

/// Convert chat log exports into HTML, Markdown, and CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "logweave")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    logweave ./exports
    logweave ./exports --author alice --keyword deploy
    logweave ./exports --start-date 2024-01-01 --end-date 2024-06-30
    logweave ./exports --css-file light.css --threads 8")]
pub struct Args {
    /// Directory containing JSON chat logs
    pub input_dir: PathBuf,

    /// Path to a custom CSS file for HTML output
    #[arg(long, value_name = "PATH")]
    pub css_file: Option<PathBuf>,

    /// Only keep messages from this author (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub author: Option<String>,

    /// Only keep messages whose content contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Only keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Only keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end_date: Option<String>,

    /// Number of worker threads
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_THREADS)]
    pub threads: usize,
}
