//! Shared helpers for filesystem operations.

use std::time::{SystemTime, UNIX_EPOCH};

/// Build the full `/fs` URL for a device path.
pub(crate) fn fs_url(base: &str, path: &str) -> String {
    format!("{}/fs{}", base.trim_end_matches('/'), path)
}

/// Current time in epoch milliseconds, for `X-Timestamp`.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Plan the intermediate directories a batch of relative file paths
/// needs, parents before children, each directory exactly once.
///
/// Input paths are slash-separated and relative (`a/b/c.txt`); the
/// result is relative directory paths without trailing slashes
/// (`a`, `a/b`) in creation order.
pub(crate) fn plan_parent_dirs(relative_paths: &[&str]) -> Vec<String> {
    let mut planned: Vec<String> = Vec::new();
    for path in relative_paths {
        let mut prefix = String::new();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        // All segments but the last are directories.
        for segment in segments.iter().take(segments.len().saturating_sub(1)) {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if !planned.iter().any(|p| p == &prefix) {
                planned.push(prefix.clone());
            }
        }
    }
    planned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_url() {
        assert_eq!(fs_url("http://cp.local", "/"), "http://cp.local/fs/");
        assert_eq!(
            fs_url("http://cp.local/", "/lib/code.py"),
            "http://cp.local/fs/lib/code.py"
        );
    }

    #[test]
    fn test_now_ms_is_numeric_epoch() {
        // Sanity bound: after 2020-01-01 in milliseconds.
        assert!(now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_plan_parent_dirs_orders_parents_first() {
        let plan = plan_parent_dirs(&["a/b/c.txt"]);
        assert_eq!(plan, vec!["a".to_string(), "a/b".to_string()]);
    }

    #[test]
    fn test_plan_parent_dirs_dedupes_across_batch() {
        let plan = plan_parent_dirs(&["a/b/c.txt", "a/d.txt", "a/b/e.txt", "top.txt"]);
        assert_eq!(plan, vec!["a".to_string(), "a/b".to_string()]);
    }

    #[test]
    fn test_plan_parent_dirs_flat_files_need_nothing() {
        assert!(plan_parent_dirs(&["code.py", "boot.py"]).is_empty());
    }
}
