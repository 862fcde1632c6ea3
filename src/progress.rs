//! Progress reporting for batch runs.
//!
//! Batch progress flows through an injected [`ProgressObserver`] rather than
//! any process-wide console state, so library users can plug in their own
//! reporting and tests can observe a run without capturing stdout.
//!
//! # Example
//!
//! ```rust
//! use logweave::progress::{ConsoleProgress, ProgressObserver};
//!
//! let progress = ConsoleProgress::new(10);
//! progress.advance(1);
//! assert_eq!(progress.processed(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Observer for batch progress and per-file events.
///
/// Implementations must be thread-safe: all workers in the pool share one
/// observer and call it concurrently.
pub trait ProgressObserver: Send + Sync {
    /// Advances the processed-file counter by `count`.
    ///
    /// Called exactly once per input file, whether it succeeded or failed.
    fn advance(&self, count: usize);

    /// Reports a human-readable event, such as a per-file failure.
    fn report(&self, message: &str);
}

/// Observer that discards all updates.
///
/// Useful when an API requires an observer but no reporting is wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn advance(&self, _count: usize) {}

    fn report(&self, _message: &str) {}
}

/// Observer that prints a processed/total line to stderr on every advance.
#[derive(Debug)]
pub struct ConsoleProgress {
    processed: AtomicUsize,
    total: usize,
}

impl ConsoleProgress {
    /// Creates an observer expecting `total` files.
    pub fn new(total: usize) -> Self {
        Self {
            processed: AtomicUsize::new(0),
            total,
        }
    }

    /// Returns the number of files processed so far.
    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::SeqCst)
    }
}

impl ProgressObserver for ConsoleProgress {
    fn advance(&self, count: usize) {
        let done = self.processed.fetch_add(count, Ordering::SeqCst) + count;
        eprintln!("   Processed {}/{} files", done, self.total);
    }

    fn report(&self, message: &str) {
        eprintln!("{message}");
    }
}
