//! Example: Rename or move a file on a device
//!
//! Usage:
//!   cargo run --example mv -- --host cpy-f57a.local --from /old.txt --to /new.txt [--password PW]

use boardfs::Session;
use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut host = None;
    let mut password = None;
    let mut from = None;
    let mut to = None;

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
            "--from" => {
                from = args.get(i + 1).cloned();
                i += 2;
            }
            "--to" => {
                to = args.get(i + 1).cloned();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let host = host.expect("--host is required");
    let from = from.expect("--from is required");
    let to = to.expect("--to is required");
    let base = format!("http://{}", host.trim_start_matches("http://"));

    let session = Session::connect(&base, password.as_deref())
        .await
        .expect("Connect failed");
    session.rename(&from, &to).await.expect("Move failed");
    println!("Moved {} -> {}", from, to);
}
