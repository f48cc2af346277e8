//! Example: List a directory on a device
//!
//! Usage:
//!   cargo run --example ls -- --host cpy-f57a.local [--password PW] [--path /lib/]

use boardfs::{render_rows, DevicePath, Session};
use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut host = None;
    let mut password = None;
    let mut path = "/".to_string();

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
                path = args.get(i + 1).cloned().unwrap_or(path);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let host = host.expect("--host is required");
    let base = format!("http://{}", host.trim_start_matches("http://"));

    let session = Session::connect(&base, password.as_deref())
        .await
        .expect("Connect failed");
    if !session.writable() {
        println!("(read-only: USB holds the drive)");
    }

    let entries = session.list(&path).await.expect("Listing failed");
    let parsed = DevicePath::parse(&path).expect("Bad path");
    println!("{}", parsed);
    for row in render_rows(&parsed, &entries) {
        println!("  {:<30} {}", row.label, row.size);
    }
}
