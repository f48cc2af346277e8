//! Example: Locate a device and list the boards it has seen
//!
//! Probes the host directly, then its `.local` mDNS form.
//!
//! Usage:
//!   cargo run --example discover -- --host cpy-f57a

use boardfs::discovery::{discovered_devices, locate};
use boardfs::http::HttpClient;
use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut host = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host" | "-H" => {
                host = args.get(i + 1).cloned();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }
    let host = host.expect("--host is required");

    let http = HttpClient::new();
    let (base, info) = locate(&http, &host).await.expect("No device found");
    println!(
        "{} at {} ({} {}, firmware {})",
        info.board_name, base, info.board_id, info.mcu_name, info.version
    );

    match discovered_devices(&http, &base).await {
        Ok(list) => {
            println!("{} other board(s) seen:", list.total);
            for device in &list.devices {
                println!("  {} ({}) {}:{}", device.hostname, device.instance_name, device.ip, device.port);
            }
        }
        Err(e) => eprintln!("devices.json unavailable: {}", e),
    }
}
