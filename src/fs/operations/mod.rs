//! Filesystem operations split into focused modules.

mod browse;
mod dir_ops;
mod upload;
mod utils;

pub use dir_ops::removal_prompt;
pub use upload::{BatchReport, UploadFile};

pub(crate) use utils::{fs_url, now_ms};
