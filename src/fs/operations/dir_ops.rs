//! Directory and node mutation operations: mkdir, remove, rename.

use log::info;

use super::utils::{fs_url, now_ms};
use crate::error::{FsError, Result};
use crate::fs::path::DevicePath;
use crate::session::Session;

impl Session {
    /// Create a directory on the device.
    ///
    /// Issues exactly one `PUT` to the slash-terminated URL with an
    /// `X-Timestamp` header carrying the current epoch milliseconds.
    /// Accepts the path with or without a trailing slash.
    pub async fn mkdir(&self, path: &str) -> Result<()> {
        self.ensure_writable()?;
        let dir = ensure_dir_path(path)?;
        let url = fs_url(self.base_url(), dir.as_str());
        self.http.put(&url, Vec::new(), now_ms()).await?;
        info!("mkdir {}", dir);
        Ok(())
    }

    /// Remove a file or directory.
    ///
    /// Directory paths (trailing slash) are removed recursively with
    /// all of their contents. The confirmation wording interactive
    /// callers should present is [`removal_prompt`].
    pub async fn remove(&self, path: &str) -> Result<()> {
        self.ensure_writable()?;
        let parsed = DevicePath::parse(path)?;
        let url = fs_url(self.base_url(), parsed.as_str());
        self.http.delete(&url).await?;
        info!("removed {}", parsed);
        Ok(())
    }

    /// Rename or move a file or directory.
    ///
    /// Issues `MOVE` with an `X-Destination` header carrying the
    /// `/fs`-prefixed destination path.
    pub async fn rename(&self, from: &str, to: &str) -> Result<()> {
        self.ensure_writable()?;
        let from = DevicePath::parse(from)?;
        let to = DevicePath::parse(to)?;
        let url = fs_url(self.base_url(), from.as_str());
        let destination = format!("/fs{}", to.as_str());
        self.http.move_to(&url, &destination).await?;
        info!("moved {} -> {}", from, to);
        Ok(())
    }
}

fn ensure_dir_path(path: &str) -> Result<DevicePath> {
    let with_slash = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };
    let parsed = DevicePath::parse(&with_slash)?;
    if parsed.is_root() {
        return Err(FsError::InvalidPath("Cannot create root".to_string()));
    }
    Ok(parsed)
}

/// Confirmation wording for removing `path`, for interactive callers.
///
/// Directory paths warn that all contents are removed too.
pub fn removal_prompt(path: &str) -> String {
    if path.ends_with('/') {
        format!("Delete {} and all of its contents?", path)
    } else {
        format!("Delete {}?", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_prompt_warns_for_directories() {
        let prompt = removal_prompt("/lib/");
        assert!(prompt.contains("and all of its contents"));
    }

    #[test]
    fn test_removal_prompt_is_plain_for_files() {
        let prompt = removal_prompt("/code.py");
        assert!(!prompt.contains("and all of its contents"));
        assert!(prompt.contains("/code.py"));
    }

    #[test]
    fn test_ensure_dir_path_appends_slash() {
        assert_eq!(ensure_dir_path("/lib").unwrap().as_str(), "/lib/");
        assert_eq!(ensure_dir_path("/lib/").unwrap().as_str(), "/lib/");
        assert!(ensure_dir_path("/").is_err());
    }
}
