//! Example: Upload local files to a device
//!
//! Each argument after the flags is a local file; it lands under the
//! destination directory with its file name. Missing parent
//! directories are created first.
//!
//! Usage:
//!   cargo run --example upload -- --host cpy-f57a.local [--password PW] [--dest /lib/] FILE...

use boardfs::progress::make_progress_bar;
use boardfs::{Session, UploadFile};
use std::env;
use std::path::Path;
use std::time::UNIX_EPOCH;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut host = None;
    let mut password = None;
    let mut dest = "/".to_string();
    let mut paths: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host" | "-H" => {
                host = args.get(i + 1).cloned();
                i += 2;
            }
            "--password" | "-p" => {
                password = args.get(i + 1).cloned();
                i += 2;
            }
            "--dest" => {
                dest = args.get(i + 1).cloned().unwrap_or(dest);
                i += 2;
            }
            other => {
                paths.push(other.to_string());
                i += 1;
            }
        }
    }

    let host = host.expect("--host is required");
    assert!(!paths.is_empty(), "at least one file is required");
    let base = format!("http://{}", host.trim_start_matches("http://"));

    let mut files = Vec::new();
    for path in &paths {
        let bytes = tokio::fs::read(path).await.expect("Read failed");
        let name = Path::new(path)
            .file_name()
            .expect("Bad file name")
            .to_string_lossy()
            .to_string();
        let modified_ms = tokio::fs::metadata(path)
            .await
            .ok()
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        files.push(UploadFile {
            relative_path: name,
            bytes,
            modified_ms,
        });
    }

    let session = Session::connect(&base, password.as_deref())
        .await
        .expect("Connect failed");
    let report = session
        .upload_batch(&dest, files, Some(make_progress_bar()))
        .await
        .expect("Batch failed");

    for path in &report.uploaded {
        println!("uploaded {}", path);
    }
    for (path, err) in &report.failed {
        eprintln!("failed {}: {}", path, err);
    }
}
