//! Per-file conversion task.
//!
//! One task takes one input file through the strict stage order
//! decode → filter → sort → render(×3). [`run_task`] is the isolation
//! boundary: whatever goes wrong inside a task is logged and swallowed
//! there, so sibling tasks and the batch keep running.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::batch::ErrorLog;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::output::{write_csv, write_html, write_markdown};
use crate::core::processor::sort_by_timestamp;
use crate::decode::decode_records;
use crate::error::LogweaveError;
use crate::format::RenderFormat;
use crate::progress::ProgressObserver;

/// Shared read-only state for all tasks in a batch.
///
/// Constructed once per run; never mutated afterwards, so workers share it
/// without locking.
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// Filter criteria applied to every file's records.
    pub filter: FilterConfig,

    /// CSS inlined into HTML artifacts.
    pub css: String,

    /// Directory receiving all artifacts and the error log.
    pub output_dir: PathBuf,
}

/// The pipeline stage a task was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStage {
    /// Reading and decoding the input file
    Decoding,
    /// Applying the filter configuration
    Filtering,
    /// Rendering and writing artifacts
    Rendering,
}

impl std::fmt::Display for TaskStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStage::Decoding => write!(f, "decode"),
            TaskStage::Filtering => write!(f, "filter"),
            TaskStage::Rendering => write!(f, "render"),
        }
    }
}

/// A task failure, tagged with the stage that produced it.
#[derive(Debug, Error)]
#[error("{stage} stage: {source}")]
pub struct TaskError {
    /// Stage the task was in when the failure occurred.
    pub stage: TaskStage,
    /// The underlying failure.
    #[source]
    pub source: LogweaveError,
}

impl TaskError {
    fn new(stage: TaskStage, source: LogweaveError) -> Self {
        Self { stage, source }
    }
}

/// Terminal state of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// All three artifacts were written.
    Done,
    /// The task failed at some stage; the failure was logged.
    Failed,
}

/// Converts one input file into its three artifacts.
///
/// Artifact names derive from the input file's base name: `chat.json`
/// produces `chat.html`, `chat.md`, and `chat.csv` in the context's output
/// directory. Two distinct inputs sharing a base name silently overwrite
/// each other's artifacts. A failure partway through rendering leaves the
/// artifacts already written in place.
pub fn process_file(path: &Path, ctx: &TaskContext) -> Result<(), TaskError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| TaskError::new(TaskStage::Decoding, e.into()))?;
    let records =
        decode_records(&raw).map_err(|e| TaskError::new(TaskStage::Decoding, e))?;

    // Total over well-formed records; the stage exists for error context
    // should that ever change.
    let mut records = apply_filters(records, &ctx.filter);
    sort_by_timestamp(&mut records);

    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");

    for format in RenderFormat::all() {
        let out = ctx.output_dir.join(format!("{stem}.{}", format.extension()));
        let result = match format {
            RenderFormat::Html => write_html(&records, &out, &ctx.css),
            RenderFormat::Markdown => write_markdown(&records, &out),
            RenderFormat::Csv => write_csv(&records, &out),
        };
        result.map_err(|e| TaskError::new(TaskStage::Rendering, e))?;
    }

    Ok(())
}

/// Runs one task to its terminal state, never propagating its failure.
///
/// On failure, one descriptive line naming the file and cause is appended to
/// the error log and echoed through the observer. The observer's counter
/// advances by one regardless of outcome.
pub fn run_task(
    path: &Path,
    ctx: &TaskContext,
    error_log: &ErrorLog,
    observer: &dyn ProgressObserver,
) -> TaskOutcome {
    let outcome = match process_file(path, ctx) {
        Ok(()) => TaskOutcome::Done,
        Err(err) => {
            let line = format!("Error processing {}: {}", path.display(), err);
            observer.report(&line);
            if let Err(log_err) = error_log.append(&line) {
                observer.report(&format!("Failed to write error log: {log_err}"));
            }
            TaskOutcome::Failed
        }
    };

    observer.advance(1);
    outcome
}
