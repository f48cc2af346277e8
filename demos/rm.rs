//! Example: Remove a file or directory on a device
//!
//! Prompts for confirmation on stdin; directory paths (trailing slash)
//! are removed with all of their contents.
//!
//! Usage:
//!   cargo run --example rm -- --host cpy-f57a.local --path /old.txt [--password PW]

use boardfs::{removal_prompt, Session};
use std::env;
use std::io::{self, BufRead, Write};

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

    print!("{} [y/N] ", removal_prompt(&path));
    io::stdout().flush().expect("stdout");
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer).expect("stdin");
    if !answer.trim().eq_ignore_ascii_case("y") {
        println!("Cancelled");
        return;
    }

    let session = Session::connect(&base, password.as_deref())
        .await
        .expect("Connect failed");
    session.remove(&path).await.expect("Remove failed");
    println!("Removed {}", path);
}
