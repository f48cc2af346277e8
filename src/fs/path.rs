//! Device path handling and navigation state.
//!
//! Paths on the device are always `/`-rooted, and directory paths are
//! always `/`-terminated. A [`DevicePath`] is the navigation state a
//! [`Session`](crate::Session) carries instead of global mutable state.

use std::fmt;

use crate::error::{FsError, Result};

/// A normalized path on the device filesystem.
///
/// Whether the path names a directory is encoded in the trailing slash,
/// matching the device's URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePath(String);

impl DevicePath {
    /// The root directory `/`.
    pub fn root() -> Self {
        DevicePath("/".to_string())
    }

    /// Parse a path, normalizing duplicate slashes and rooting it.
    ///
    /// A trailing slash is preserved: `"lib/"` parses as a directory,
    /// `"lib"` as a file path.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Ok(Self::root());
        }
        let is_dir = path.ends_with('/');
        let mut normalized = String::from("/");
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            // Reject traversal segments, not names that merely contain dots.
            if segment == ".." {
                return Err(FsError::InvalidPath(path.to_string()));
            }
            normalized.push_str(segment);
            normalized.push('/');
        }
        if !is_dir && normalized.len() > 1 {
            normalized.pop();
        }
        Ok(DevicePath(normalized))
    }

    /// Whether this path names a directory (trailing slash).
    pub fn is_dir(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Whether this is the root directory.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Join a child name onto a directory path.
    ///
    /// `dir` controls whether the result is a directory path. Fails on
    /// file paths and on names containing `/`.
    pub fn join(&self, name: &str, dir: bool) -> Result<Self> {
        if !self.is_dir() {
            return Err(FsError::InvalidPath(format!(
                "Cannot join onto file path: {}",
                self.0
            )));
        }
        if name.is_empty() || name.contains('/') || name == ".." {
            return Err(FsError::InvalidPath(name.to_string()));
        }
        let mut joined = self.0.clone();
        joined.push_str(name);
        if dir {
            joined.push('/');
        }
        Ok(DevicePath(joined))
    }

    /// The parent directory (the ".." row). The root is its own parent.
    pub fn parent(&self) -> Self {
        if self.is_root() {
            return self.clone();
        }
        let trimmed = self.0.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) => DevicePath(self.0[..idx + 1].to_string()),
            None => Self::root(),
        }
    }

    /// The path as a string, for building `/fs` URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DevicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roots_and_normalizes() {
        assert_eq!(DevicePath::parse("").unwrap().as_str(), "/");
        assert_eq!(DevicePath::parse("/").unwrap().as_str(), "/");
        assert_eq!(DevicePath::parse("lib").unwrap().as_str(), "/lib");
        assert_eq!(DevicePath::parse("lib/").unwrap().as_str(), "/lib/");
        assert_eq!(DevicePath::parse("//lib//fonts/").unwrap().as_str(), "/lib/fonts/");
        assert_eq!(DevicePath::parse("/code.py").unwrap().as_str(), "/code.py");
    }

    #[test]
    fn test_parse_rejects_dotdot_segments() {
        assert!(DevicePath::parse("/lib/../boot.py").is_err());
        assert!(DevicePath::parse("..").is_err());
        assert!(DevicePath::parse("/../").is_err());
    }

    #[test]
    fn test_parse_accepts_names_with_consecutive_dots() {
        assert_eq!(DevicePath::parse("/v1..2.txt").unwrap().as_str(), "/v1..2.txt");
        assert_eq!(DevicePath::parse("/a..b/").unwrap().as_str(), "/a..b/");
        assert_eq!(DevicePath::parse("/...").unwrap().as_str(), "/...");
    }

    #[test]
    fn test_dir_is_encoded_in_trailing_slash() {
        assert!(DevicePath::parse("/lib/").unwrap().is_dir());
        assert!(!DevicePath::parse("/code.py").unwrap().is_dir());
        assert!(DevicePath::root().is_dir());
    }

    #[test]
    fn test_join() {
        let root = DevicePath::root();
        assert_eq!(root.join("lib", true).unwrap().as_str(), "/lib/");
        assert_eq!(root.join("code.py", false).unwrap().as_str(), "/code.py");
        let lib = DevicePath::parse("/lib/").unwrap();
        assert_eq!(lib.join("fonts", true).unwrap().as_str(), "/lib/fonts/");
        assert!(lib.join("a/b", false).is_err());
        assert!(DevicePath::parse("/code.py").unwrap().join("x", false).is_err());
    }

    #[test]
    fn test_join_rejects_dotdot_but_accepts_dotted_names() {
        let root = DevicePath::root();
        assert!(root.join("..", true).is_err());
        assert!(root.join("..", false).is_err());
        assert_eq!(root.join("v1..2.txt", false).unwrap().as_str(), "/v1..2.txt");
    }

    #[test]
    fn test_parent() {
        assert_eq!(DevicePath::root().parent().as_str(), "/");
        assert_eq!(DevicePath::parse("/lib/").unwrap().parent().as_str(), "/");
        assert_eq!(
            DevicePath::parse("/lib/fonts/").unwrap().parent().as_str(),
            "/lib/"
        );
        assert_eq!(
            DevicePath::parse("/lib/fonts.py").unwrap().parent().as_str(),
            "/lib/"
        );
    }
}
