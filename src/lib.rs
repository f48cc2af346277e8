//! # boardfs
//!
//! Async Rust client for the HTTP filesystem workflow exposed by small
//! embedded boards: browse, upload, rename, delete, and edit files on a
//! device over its `/fs` endpoint, with device discovery over `/cp`.
//!
//! ## Features
//!
//! - **Sessions**: one [`Session`] per device holding the transport,
//!   the writable capability learned from a single OPTIONS probe, and
//!   the current directory. No global state.
//! - **Browsing**: sorted directory listings (directories first, then
//!   case-insensitive by name) and a pure row renderer for display.
//! - **File operations**: mkdir, recursive delete, rename via `MOVE`,
//!   single uploads, and sequential batch uploads that create missing
//!   intermediate directories exactly once per batch.
//! - **Editor bridge**: load a file's text and save edits back with a
//!   byte-exact round trip.
//! - **Discovery**: board identity from `/cp/version.json`, neighbors
//!   from `/cp/devices.json`, and `.local` mDNS hostname fallback.
//!
//! Every network call returns a typed [`Result`]: HTTP failures,
//! transport failures, and malformed JSON are distinct [`FsError`]
//! variants callers must branch on. Mutations on a read-only mount
//! fail fast with [`FsError::ReadOnly`] before any request is sent.
//!
//! ## Example: list a device directory
//!
//! ```no_run
//! use boardfs::Session;
//!
//! # async fn example() -> boardfs::Result<()> {
//! let session = Session::connect("http://cpy-f57a.local", None).await?;
//! if !session.writable() {
//!     println!("Device is read-only (USB holds the drive)");
//! }
//! for entry in session.list("/").await? {
//!     println!("{} {}", if entry.directory { "d" } else { "-" }, entry.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: upload a tree
//!
//! ```no_run
//! use boardfs::{Session, UploadFile};
//! use boardfs::progress::make_progress_bar;
//!
//! # async fn example() -> boardfs::Result<()> {
//! let session = Session::connect("http://cpy-f57a.local", Some("passw0rd")).await?;
//! let files = vec![
//!     UploadFile::new("code.py", b"print('hi')".to_vec()),
//!     UploadFile::new("lib/helper.py", b"VALUE = 1".to_vec()),
//! ];
//! let report = session
//!     .upload_batch("/", files, Some(make_progress_bar()))
//!     .await?;
//! for (path, err) in &report.failed {
//!     eprintln!("failed: {}: {}", path, err);
//! }
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod editor;
pub mod error;
pub mod fs;
pub mod http;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use discovery::{locate, DeviceList, DiscoveredDevice, VersionInfo};
pub use error::{FsError, Result};
pub use fs::{
    format_size, removal_prompt, render_rows, sort_entries, BatchReport, DevicePath,
    DirectoryEntry, ListingRow, UploadFile,
};
pub use progress::{BatchProgress, ProgressCallback};
pub use session::Session;
