//! Filesystem types and operations.

pub(crate) mod entry;
mod operations;
pub(crate) mod path;

pub use entry::{format_size, render_rows, sort_entries, DirectoryEntry, ListingRow};
pub use operations::{removal_prompt, BatchReport, UploadFile};
pub use path::DevicePath;

pub(crate) use operations::{fs_url, now_ms};
