//! Upload operations: single files and batches with nested paths.

use log::{info, warn};

use super::utils::{fs_url, now_ms, plan_parent_dirs};
use crate::error::{FsError, Result};
use crate::fs::path::DevicePath;
use crate::progress::{BatchProgress, ProgressCallback};
use crate::session::Session;

/// One file queued for a batch upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Path relative to the batch destination directory, slash-separated
    /// (e.g. `c.txt` or `a/b/c.txt` from a directory-tree selection).
    pub relative_path: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// Source modification time in epoch milliseconds.
    pub modified_ms: u64,
}

impl UploadFile {
    /// Create an upload item stamped with the current time.
    pub fn new(relative_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            relative_path: relative_path.into(),
            bytes,
            modified_ms: now_ms(),
        }
    }
}

/// Outcome of a batch upload.
///
/// A failed file does not abort the batch; it is recorded here and the
/// batch continues with the next file.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Relative paths uploaded successfully, in order.
    pub uploaded: Vec<String>,
    /// Relative paths that failed, with the error each hit.
    pub failed: Vec<(String, FsError)>,
    /// True when the progress callback cancelled the batch early.
    pub cancelled: bool,
}

impl BatchReport {
    /// Whether every file in the batch was uploaded.
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty() && !self.cancelled
    }
}

impl Session {
    /// Upload raw bytes as a file on the device.
    ///
    /// Creates or overwrites `path` with a single `PUT` carrying
    /// `Content-Type: application/octet-stream` and the source
    /// modification time in `X-Timestamp`.
    pub async fn upload(&self, path: &str, bytes: Vec<u8>, modified_ms: u64) -> Result<()> {
        self.ensure_writable()?;
        let parsed = DevicePath::parse(path)?;
        if parsed.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Upload target is a directory path: {}",
                parsed
            )));
        }
        let url = fs_url(self.base_url(), parsed.as_str());
        let size = bytes.len();
        self.http.put(&url, bytes, modified_ms).await?;
        info!("uploaded {} ({} bytes)", parsed, size);
        Ok(())
    }

    /// Upload a batch of files under a destination directory.
    ///
    /// Missing intermediate directories are created first, parents
    /// before children, each at most once per batch. Files are then
    /// sent strictly sequentially in the given order. A per-file
    /// failure is recorded in the report and the batch continues; a
    /// failed intermediate mkdir aborts (its files cannot land).
    ///
    /// The optional callback is invoked before each file and once at
    /// completion; returning `false` cancels the batch between files.
    pub async fn upload_batch(
        &self,
        dest_dir: &str,
        files: Vec<UploadFile>,
        mut progress: Option<ProgressCallback>,
    ) -> Result<BatchReport> {
        self.ensure_writable()?;
        let dest = DevicePath::parse(dest_dir)?;
        if !dest.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Batch destination is not a directory path: {}",
                dest
            )));
        }

        // Create every missing ancestor before any file PUT.
        let relative: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        for dir in plan_parent_dirs(&relative) {
            let dir_path = format!("{}{}/", dest.as_str(), dir);
            self.mkdir(&dir_path).await?;
        }

        let mut report = BatchReport::default();
        let total = files.len();
        for (index, file) in files.into_iter().enumerate() {
            if let Some(cb) = progress.as_mut() {
                if !cb(&BatchProgress::new(index, total, &file.relative_path)) {
                    report.cancelled = true;
                    return Ok(report);
                }
            }
            let path = format!("{}{}", dest.as_str(), file.relative_path);
            match self.upload(&path, file.bytes, file.modified_ms).await {
                Ok(()) => report.uploaded.push(file.relative_path),
                Err(e) => {
                    warn!("upload failed for {}: {}", file.relative_path, e);
                    report.failed.push((file.relative_path, e));
                }
            }
        }
        if let Some(cb) = progress.as_mut() {
            cb(&BatchProgress::new(total, total, ""));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_file_new_stamps_current_time() {
        let file = UploadFile::new("code.py", b"print('hi')".to_vec());
        assert_eq!(file.relative_path, "code.py");
        assert!(file.modified_ms > 1_577_836_800_000);
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = BatchReport::default();
        assert!(report.is_complete_success());
    }

    #[test]
    fn test_failed_or_cancelled_report_is_not_success() {
        let mut report = BatchReport::default();
        report.failed.push(("a.txt".to_string(), FsError::HttpError(500)));
        assert!(!report.is_complete_success());

        let cancelled = BatchReport {
            cancelled: true,
            ..Default::default()
        };
        assert!(!cancelled.is_complete_success());
    }
}
