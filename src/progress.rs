//! Progress reporting for upload batches.

/// Progress of a batch upload, counted in whole files.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Files finished so far (uploaded or failed)
    pub files_done: usize,
    /// Total files in the batch
    pub files_total: usize,
    /// Relative path of the file being transferred
    pub current: String,
}

impl BatchProgress {
    /// Create a new progress report.
    pub fn new(files_done: usize, files_total: usize, current: impl Into<String>) -> Self {
        Self {
            files_done,
            files_total,
            current: current.into(),
        }
    }

    /// Get progress as a percentage (0.0 to 100.0).
    pub fn percent(&self) -> f64 {
        if self.files_total == 0 {
            return 0.0;
        }
        (self.files_done as f64 / self.files_total as f64) * 100.0
    }

    /// Check if the batch is complete.
    pub fn is_complete(&self) -> bool {
        self.files_done >= self.files_total
    }
}

/// Type alias for progress callback function.
///
/// The callback receives progress information and can return `false` to
/// cancel the batch before the next file starts.
pub type ProgressCallback = Box<dyn FnMut(&BatchProgress) -> bool + Send>;

/// Create a simple progress callback that prints to stdout.
pub fn make_progress_bar() -> ProgressCallback {
    Box::new(|progress: &BatchProgress| {
        print!(
            "\r[{}/{}] {:.0}% {}",
            progress.files_done,
            progress.files_total,
            progress.percent(),
            progress.current
        );
        if progress.is_complete() {
            println!();
        }
        true
    })
}
