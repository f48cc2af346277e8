//! Device discovery via the `/cp` metadata endpoints.
//!
//! A device answers `GET /cp/version.json` with its own identity and
//! `GET /cp/devices.json` with the other boards it has heard over
//! mDNS. [`locate`] probes a host directly and falls back to its
//! `.local` mDNS hostname form.

use log::debug;
use serde::Deserialize;

use crate::error::{FsError, Result};
use crate::http::HttpClient;

/// Board identity and workflow metadata from `/cp/version.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionInfo {
    /// Web API revision.
    #[serde(default)]
    pub web_api_version: u32,
    /// Firmware version string.
    pub version: String,
    /// Firmware build date (YYYY-MM-DD).
    #[serde(default)]
    pub build_date: String,
    /// Human-readable board name.
    #[serde(default)]
    pub board_name: String,
    /// Microcontroller name.
    #[serde(default)]
    pub mcu_name: String,
    /// Stable board identifier.
    #[serde(default)]
    pub board_id: String,
    /// mDNS hostname (without `.local`).
    #[serde(default)]
    pub hostname: String,
    /// HTTP port the workflow listens on.
    #[serde(default)]
    pub port: u16,
    /// IP address as the device reports it.
    #[serde(default)]
    pub ip: String,
}

/// One neighbor from `/cp/devices.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveredDevice {
    /// mDNS hostname (without `.local`).
    pub hostname: String,
    /// Advertised instance name, usually the board name.
    #[serde(default)]
    pub instance_name: String,
    /// IP address.
    #[serde(default)]
    pub ip: String,
    /// HTTP port.
    #[serde(default)]
    pub port: u16,
}

/// Devices a board has discovered over mDNS, from `/cp/devices.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceList {
    /// Total devices seen.
    #[serde(default)]
    pub total: u32,
    /// The devices themselves.
    #[serde(default)]
    pub devices: Vec<DiscoveredDevice>,
}

/// Fetch a device's identity from `GET /cp/version.json`.
pub async fn version_info(http: &HttpClient, base_url: &str) -> Result<VersionInfo> {
    let url = format!("{}/cp/version.json", base_url.trim_end_matches('/'));
    http.get_json(&url).await
}

/// Fetch the devices a board has seen from `GET /cp/devices.json`.
pub async fn discovered_devices(http: &HttpClient, base_url: &str) -> Result<DeviceList> {
    let url = format!("{}/cp/devices.json", base_url.trim_end_matches('/'));
    http.get_json(&url).await
}

/// Locate a device by host name or address.
///
/// Probes the version endpoint at each candidate base URL in order and
/// returns the first that answers: the host as given, then its `.local`
/// mDNS form when the bare name fails.
pub async fn locate(http: &HttpClient, host: &str) -> Result<(String, VersionInfo)> {
    for base in candidate_bases(host) {
        debug!("probing {}", base);
        match version_info(http, &base).await {
            Ok(info) => return Ok((base, info)),
            Err(e) => debug!("no answer from {}: {}", base, e),
        }
    }
    Err(FsError::DeviceNotFound(host.to_string()))
}

/// Candidate base URLs for a host, in probe order.
fn candidate_bases(host: &str) -> Vec<String> {
    let host = host
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string();
    let mut bases = vec![format!("http://{}", host)];
    // Bare single-label names also get the mDNS .local form.
    if !host.contains('.') && !host.contains(':') {
        bases.push(format!("http://{}.local", host));
    }
    bases
}
