//! HTTP transport for device requests.
//!
//! Every method returns a typed [`Result`]: transport failures map to
//! [`FsError::RequestError`], non-2xx statuses to [`FsError::HttpError`]
//! (404 to [`FsError::NotFound`]). Callers always see what went wrong.

use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::error::{FsError, Result};

/// Header carrying the file/directory modification time in epoch
/// milliseconds on mutating requests.
pub(crate) const X_TIMESTAMP: &str = "X-Timestamp";

/// Header carrying the `/fs`-prefixed destination path of a `MOVE`.
pub(crate) const X_DESTINATION: &str = "X-Destination";

/// HTTP client for making requests to a device.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    password: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client without credentials.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            password: None,
        }
    }

    /// Create a new HTTP client authenticating with the device password.
    ///
    /// The device expects HTTP Basic auth with an empty username.
    pub fn with_password(password: &str) -> Self {
        Self {
            client: Client::new(),
            password: Some(password.to_string()),
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.password {
            Some(password) => builder.basic_auth("", Some(password)),
            None => builder,
        }
    }

    fn check(url: &str, response: Response) -> Result<Response> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FsError::NotFound(url.to_string()));
        }
        if !response.status().is_success() {
            return Err(FsError::HttpError(response.status().as_u16()));
        }
        Ok(response)
    }

    /// GET a JSON document, deserializing it into `T`.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .request(Method::GET, url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let body = Self::check(url, response)?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET raw file content.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.request(Method::GET, url).send().await?;
        Ok(Self::check(url, response)?.bytes().await?.to_vec())
    }

    /// PUT raw bytes, stamped with the given modification time.
    ///
    /// A trailing-slash URL with an empty body creates a directory;
    /// otherwise this creates or overwrites a file.
    pub async fn put(&self, url: &str, body: Vec<u8>, timestamp_ms: u64) -> Result<()> {
        let response = self
            .request(Method::PUT, url)
            .header("Content-Type", "application/octet-stream")
            .header(X_TIMESTAMP, timestamp_ms.to_string())
            .body(body)
            .send()
            .await?;
        Self::check(url, response)?;
        Ok(())
    }

    /// DELETE a file or directory (directories are removed recursively).
    pub async fn delete(&self, url: &str) -> Result<()> {
        let response = self.request(Method::DELETE, url).send().await?;
        Self::check(url, response)?;
        Ok(())
    }

    /// MOVE to a new path given as the `/fs`-prefixed destination.
    pub async fn move_to(&self, url: &str, destination: &str) -> Result<()> {
        let method = Method::from_bytes(b"MOVE")
            .map_err(|e| FsError::Custom(format!("Invalid method: {}", e)))?;
        let response = self
            .request(method, url)
            .header(X_DESTINATION, destination)
            .send()
            .await?;
        Self::check(url, response)?;
        Ok(())
    }

    /// OPTIONS probe returning the `Access-Control-Allow-Methods` header,
    /// or an empty string when the header is absent.
    pub async fn options_allowed_methods(&self, url: &str) -> Result<String> {
        let response = self.request(Method::OPTIONS, url).send().await?;
        let response = Self::check(url, response)?;
        let allowed = response
            .headers()
            .get("Access-Control-Allow-Methods")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Ok(allowed)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
