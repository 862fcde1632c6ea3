//! Batch coordination across input files.
//!
//! [`run_batch`] fans the discovered files out to a bounded worker pool and
//! blocks until every file reached a terminal state. Tasks are independent:
//! completion order is unconstrained, and a failing file never affects its
//! siblings. Only setup problems (pool construction) abort the run itself.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::error::Result;
use crate::progress::ProgressObserver;
use crate::task::{TaskContext, TaskOutcome, run_task};

/// Default worker pool size.
pub const DEFAULT_THREADS: usize = 4;

/// Name of the shared error log inside the output directory.
pub const ERROR_LOG_NAME: &str = "error_log.txt";

/// Append-only error log shared by all workers.
///
/// The file is opened lazily on first append, so a clean run leaves no log
/// behind. Each line is formatted by the caller and written as a single
/// `writeln!` under the lock; lines from concurrent tasks never interleave
/// mid-line.
#[derive(Debug)]
pub struct ErrorLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ErrorLog {
    /// Creates a log writing to `error_log.txt` inside `output_dir`.
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(ERROR_LOG_NAME),
            lock: Mutex::new(()),
        }
    }

    /// Returns the path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line to the log.
    pub fn append(&self, line: &str) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// Outcome counts for a completed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Total files that reached a terminal state.
    pub processed: usize,
    /// Files whose task failed and was logged.
    pub failed: usize,
}

impl BatchSummary {
    /// Files that produced all three artifacts.
    pub fn converted(&self) -> usize {
        self.processed - self.failed
    }
}

/// Processes every file on a bounded worker pool of `threads` workers.
///
/// Workers pull the next unprocessed file as they free up; assignment order
/// is the order of `files`, completion order is unconstrained. Blocks until
/// all files reached [`TaskOutcome::Done`] or [`TaskOutcome::Failed`].
///
/// Per-file failures land in the error log and the summary; only failing to
/// construct the pool itself errors here.
pub fn run_batch(
    files: &[PathBuf],
    ctx: &TaskContext,
    threads: usize,
    observer: &dyn ProgressObserver,
) -> Result<BatchSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| io::Error::other(e.to_string()))?;

    let error_log = ErrorLog::new(&ctx.output_dir);
    let failed = AtomicUsize::new(0);

    pool.install(|| {
        files.par_iter().for_each(|path| {
            if run_task(path, ctx, &error_log, observer) == TaskOutcome::Failed {
                failed.fetch_add(1, Ordering::Relaxed);
            }
        });
    });

    Ok(BatchSummary {
        processed: files.len(),
        failed: failed.into_inner(),
    })
}
