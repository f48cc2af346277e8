//! Directory entry types and listing presentation.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::fs::path::DevicePath;

/// One entry of a device directory listing.
///
/// Produced by the device, consumed read-only; listings are ephemeral
/// and re-fetched on every navigation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name (no path components).
    pub name: String,
    /// Whether the entry is a directory.
    pub directory: bool,
    /// File size in bytes (0 for directories).
    #[serde(default)]
    pub file_size: u64,
    /// Modification time in nanoseconds since the Unix epoch.
    #[serde(default)]
    pub modified_ns: u64,
}

impl DirectoryEntry {
    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        !self.directory
    }

    /// Modification time in epoch milliseconds, as used by `X-Timestamp`.
    pub fn modified_ms(&self) -> u64 {
        self.modified_ns / 1_000_000
    }
}

/// Sort a listing in display order: directories before files, then
/// case-insensitive ascending by name within each group.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| match (a.directory, b.directory) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
}

/// One row of a rendered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    /// Display label: the entry name, with a trailing `/` for directories.
    pub label: String,
    /// Formatted size, empty for directories and the ".." row.
    pub size: String,
}

/// Render a sorted listing to display rows.
///
/// Pure function from entries to rows: a ".." row leads when `path` is
/// not the root, directories carry a trailing slash, files a formatted
/// size.
pub fn render_rows(path: &DevicePath, entries: &[DirectoryEntry]) -> Vec<ListingRow> {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    if !path.is_root() {
        rows.push(ListingRow {
            label: "..".to_string(),
            size: String::new(),
        });
    }
    for entry in entries {
        if entry.directory {
            rows.push(ListingRow {
                label: format!("{}/", entry.name),
                size: String::new(),
            });
        } else {
            rows.push(ListingRow {
                label: entry.name.clone(),
                size: format_size(entry.file_size),
            });
        }
    }
    rows
}

/// Format a byte count for display.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
