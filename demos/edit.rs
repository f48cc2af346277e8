//! Example: Edit a device file with a local editor
//!
//! Downloads the file, opens `$EDITOR` on a temporary copy, and saves
//! the result back to the device. Last write wins; there is no
//! conflict detection.
//!
//! Usage:
//!   cargo run --example edit -- --host cpy-f57a.local --path /code.py [--password PW]

use boardfs::Session;
use std::env;
use std::process::Command;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut host = None;
    let mut password = None;
    let mut path = None;

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
            "--path" => {
                path = args.get(i + 1).cloned();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let host = host.expect("--host is required");
    let path = path.expect("--path is required");
    let base = format!("http://{}", host.trim_start_matches("http://"));

    let session = Session::connect(&base, password.as_deref())
        .await
        .expect("Connect failed");

    let text = match session.load_text(&path).await {
        Ok(text) => text,
        Err(boardfs::FsError::NotFound(_)) => String::new(),
        Err(e) => panic!("Load failed: {}", e),
    };

    let local = env::temp_dir().join(
        path.rsplit('/')
            .next()
            .filter(|n| !n.is_empty())
            .unwrap_or("device-file"),
    );
    tokio::fs::write(&local, &text).await.expect("Write failed");

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor)
        .arg(&local)
        .status()
        .expect("Editor failed to start");
    if !status.success() {
        println!("Editor exited without saving; leaving device untouched");
        return;
    }

    let edited = tokio::fs::read_to_string(&local).await.expect("Read failed");
    if edited == text {
        println!("No changes");
        return;
    }
    session.save_text(&path, &edited).await.expect("Save failed");
    println!("Saved {} ({} bytes)", path, edited.len());
}
