//! Editor bridge: load a file's text and save edits back.
//!
//! Saves carry no conflict detection (no ETag/If-Match); two clients
//! editing the same file silently last-write-win, matching the device's
//! own editor page.

use crate::error::{FsError, Result};
use crate::fs::path::DevicePath;
use crate::fs::{fs_url, now_ms};
use crate::session::Session;

impl Session {
    /// Load a file's content as text.
    ///
    /// Non-UTF-8 content surfaces as [`FsError::InvalidUtf8`].
    pub async fn load_text(&self, path: &str) -> Result<String> {
        let bytes = self.download(path).await?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Save the full text of a file, overwriting its content.
    ///
    /// Round-trip invariant: the bytes written are exactly the bytes a
    /// subsequent [`load_text`](Session::load_text) returns, with no
    /// transformation.
    pub async fn save_text(&self, path: &str, text: &str) -> Result<()> {
        self.upload(path, text.as_bytes().to_vec(), now_ms()).await
    }

    /// Download a file's raw content.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>> {
        let parsed = DevicePath::parse(path)?;
        if parsed.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Download target is a directory path: {}",
                parsed
            )));
        }
        let url = fs_url(self.base_url(), parsed.as_str());
        self.http.get_bytes(&url).await
    }
}
