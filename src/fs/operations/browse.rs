//! Directory listing operations.

use super::utils::fs_url;
use crate::error::{FsError, Result};
use crate::fs::entry::{sort_entries, DirectoryEntry};
use crate::fs::path::DevicePath;
use crate::session::Session;

impl Session {
    /// List a directory on the device, sorted for display.
    ///
    /// Directories sort before files regardless of name; within each
    /// group, names compare case-insensitively ascending. A malformed
    /// listing surfaces as [`FsError::JsonError`].
    ///
    /// # Arguments
    /// * `path` - Directory path (e.g. `/`, `/lib/`)
    pub async fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let parsed = DevicePath::parse(path)?;
        if !parsed.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Not a directory path: {}",
                parsed
            )));
        }
        let url = fs_url(self.base_url(), parsed.as_str());
        let mut entries: Vec<DirectoryEntry> = self.http.get_json(&url).await?;
        sort_entries(&mut entries);
        Ok(entries)
    }

    /// List the current working directory.
    pub async fn refresh(&self) -> Result<Vec<DirectoryEntry>> {
        let cwd = self.cwd().as_str().to_string();
        self.list(&cwd).await
    }
}
