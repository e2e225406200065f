//! WeChat HTTP Client
//!
//! Thin reqwest wrapper shared by every API family. It knows how to send
//! JSON requests to the platform host, XML requests to the payment host,
//! and how to dispatch image-or-error responses from the Mini Program
//! code endpoints. It holds no credentials and no state beyond the
//! underlying connection pool.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::WechatError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.weixin.qq.com";
pub(crate) const DEFAULT_PAY_BASE_URL: &str = "https://api.mch.weixin.qq.com";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// WeChat API Client
///
/// Reusable HTTP client for calling WeChat APIs.
/// Built with reqwest for async HTTP requests.
#[derive(Debug, Clone)]
pub struct WechatClient {
    http: Client,
    base_url: String,
    pay_base_url: String,
}

impl WechatClient {
    /// Create a new client builder
    pub fn builder() -> WechatClientBuilder {
        WechatClientBuilder::default()
    }

    /// Create a client with the default base URLs and timeouts.
    pub fn new() -> Result<Self, WechatError> {
        Self::builder().build()
    }

    /// Base URL for the platform JSON APIs
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL for the payment XML APIs
    pub fn pay_base_url(&self) -> &str {
        &self.pay_base_url
    }

    /// Returns the underlying [`reqwest::Client`] for raw HTTP requests.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Make a GET request and decode the JSON response.
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/cgi-bin/token")
    /// * `query` - Query parameters as key-value pairs
    ///
    /// # Errors
    /// - `WechatError::Http` for transport failures or non-2xx statuses
    /// - `WechatError::MalformedResponse` when the body is not valid JSON
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, WechatError> {
        debug!("GET {path}");
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(url).query(query).send().await?;
        decode_json(response).await
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    ///
    /// # Errors
    /// - `WechatError::Http` for transport failures or non-2xx statuses
    /// - `WechatError::MalformedResponse` when the body is not valid JSON
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WechatError> {
        debug!("POST {path}");
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(url).json(body).send().await?;
        decode_json(response).await
    }

    /// POST an XML body to the payment host and return the raw response text.
    ///
    /// The payment API ignores the content type as long as the body is the
    /// expected `<xml>` document, so the body is sent as plain text.
    pub async fn post_xml(&self, path: &str, body: String) -> Result<String, WechatError> {
        debug!("POST {path} (xml)");
        let url = format!("{}{}", self.pay_base_url, path);
        let response = self.http.post(url).body(body).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    /// POST a JSON body and return the response as image bytes.
    ///
    /// The Mini Program code endpoints answer with raw image content on
    /// success and a JSON error envelope on failure, distinguished only by
    /// the response content type.
    ///
    /// # Errors
    /// - `WechatError::Api` when the response is a JSON error envelope
    /// - `WechatError::MalformedResponse` when a non-image body is not a
    ///   recognizable envelope
    pub async fn post_image<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, WechatError> {
        debug!("POST {path} (image)");
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(url).json(body).send().await?;
        let response = response.error_for_status()?;

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("image/") {
            return Ok(response.bytes().await?.to_vec());
        }

        // Not an image: the body is an errcode envelope, typically served
        // as application/json but sometimes as text/plain.
        let text = response.text().await?;
        let envelope: ErrorEnvelope = serde_json::from_str(&text).map_err(|_| {
            WechatError::MalformedResponse(format!(
                "expected image or error envelope ({content_type}): {text}"
            ))
        })?;
        Err(WechatError::Api {
            code: envelope.errcode,
            message: envelope.errmsg,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errcode: i32,
    #[serde(default)]
    errmsg: String,
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, WechatError> {
    let response = response.error_for_status()?;
    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| WechatError::MalformedResponse(format!("invalid JSON response: {e}")))
}

/// Builder for WechatClient
///
/// # Example
///
/// ```rust
/// use wechat_sdk::client::WechatClient;
///
/// let client = WechatClient::builder()
///     .base_url("https://api.weixin.qq.com")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct WechatClientBuilder {
    base_url: Option<String>,
    pay_base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl WechatClientBuilder {
    /// Set the base URL for the platform JSON APIs
    ///
    /// Default: `<https://api.weixin.qq.com>`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the base URL for the payment XML APIs
    ///
    /// Default: `<https://api.mch.weixin.qq.com>`
    pub fn pay_base_url(mut self, url: impl Into<String>) -> Self {
        self.pay_base_url = Some(url.into());
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the WechatClient
    ///
    /// # Errors
    /// Returns an error if a base URL does not carry an http(s) scheme
    pub fn build(self) -> Result<WechatClient, WechatError> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let pay_base_url = self
            .pay_base_url
            .unwrap_or_else(|| DEFAULT_PAY_BASE_URL.to_string());

        for url in [&base_url, &pay_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WechatError::Config(format!(
                    "base URL must start with http:// or https://, got: {}",
                    url
                )));
            }
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(WechatClient {
            http: client,
            base_url,
            pay_base_url,
        })
    }
}
