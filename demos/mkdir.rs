//! Example: Create a directory on a device
//!
//! Usage:
//!   cargo run --example mkdir -- --host cpy-f57a.local --path /lib/fonts [--password PW]

use boardfs::Session;
use std::env;

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
    session.mkdir(&path).await.expect("mkdir failed");
    println!("Created {}", path);
}
