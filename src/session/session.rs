//! Device session: connection state, capability probe, navigation.

use log::info;

use crate::error::{FsError, Result};
use crate::fs::path::DevicePath;
use crate::http::HttpClient;

/// A connected device filesystem session.
///
/// Holds the transport, the writable capability learned from the one
/// OPTIONS probe at connect time, and the current directory. All
/// filesystem operations hang off this type; there is no global state.
#[derive(Debug)]
pub struct Session {
    pub(crate) http: HttpClient,
    base: String,
    writable: bool,
    cwd: DevicePath,
}

impl Session {
    /// Connect to a device at `base_url` (e.g. `http://cpy-f57a.local`).
    ///
    /// Issues the capability probe (`OPTIONS /fs/`) once; the result is
    /// cached for the session's lifetime. Pass the device password when
    /// the device requires authentication.
    pub async fn connect(base_url: &str, password: Option<&str>) -> Result<Self> {
        let base = base_url.trim_end_matches('/').to_string();
        let http = match password {
            Some(p) => HttpClient::with_password(p),
            None => HttpClient::new(),
        };

        let allowed = http
            .options_allowed_methods(&format!("{}/fs/", base))
            .await?;
        let writable = allow_header_permits_delete(&allowed);
        info!(
            "connected to {} ({})",
            base,
            if writable { "writable" } else { "read-only" }
        );

        Ok(Session {
            http,
            base,
            writable,
            cwd: DevicePath::root(),
        })
    }

    /// Whether the device mount accepts mutating methods.
    ///
    /// When false the device filesystem is mounted read-only (typically
    /// because USB has claimed the drive) and every mutating operation
    /// fails with [`FsError::ReadOnly`] without touching the network.
    pub fn writable(&self) -> bool {
        self.writable
    }

    /// The device base URL.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Current working directory.
    pub fn cwd(&self) -> &DevicePath {
        &self.cwd
    }

    /// Change the current working directory.
    ///
    /// Accepts a directory path (`/lib/`); a file path is rejected.
    pub fn cd(&mut self, path: &str) -> Result<()> {
        let parsed = DevicePath::parse(path)?;
        if !parsed.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Not a directory path: {}",
                parsed
            )));
        }
        self.cwd = parsed;
        Ok(())
    }

    /// Navigate to the parent directory (the ".." row).
    pub fn cd_up(&mut self) {
        self.cwd = self.cwd.parent();
    }

    pub(crate) fn ensure_writable(&self) -> Result<()> {
        if self.writable {
            Ok(())
        } else {
            Err(FsError::ReadOnly)
        }
    }
}

/// Whether an `Access-Control-Allow-Methods` header value signals a
/// writable mount: true iff the method list contains `DELETE`.
pub(crate) fn allow_header_permits_delete(allowed: &str) -> bool {
    allowed
        .split(',')
        .any(|m| m.trim().eq_ignore_ascii_case("DELETE"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_header_with_delete_is_writable() {
        assert!(allow_header_permits_delete(
            "GET, OPTIONS, PUT, DELETE, MOVE"
        ));
        assert!(allow_header_permits_delete("delete"));
    }

    #[test]
    fn test_allow_header_without_delete_is_read_only() {
        assert!(!allow_header_permits_delete("GET, OPTIONS"));
        assert!(!allow_header_permits_delete(""));
        // Substring of another token must not count.
        assert!(!allow_header_permits_delete("UNDELETE"));
    }
}
