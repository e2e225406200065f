//! WeChat API SDK for Rust
//!
//! A client SDK for the WeChat (Weixin) Official Account, Open Platform,
//! Mini Program and Payment HTTP APIs. It builds request URLs and bodies,
//! computes the platform's SHA1/MD5 signatures for the JS-SDK ticket and
//! payment flows, and converts payloads between JSON/XML and plain
//! values.
//!
//! Every operation is a single outbound HTTP call. The SDK keeps no
//! state: no token cache, no retries, no credential store. Credentials
//! are passed explicitly on each call.
//!
//! ## API Coverage
//!
//! | Family | Operations |
//! |--------|-----------|
//! | Access Token | global token fetch |
//! | User | profile lookup (single, batch) |
//! | Menu | custom menu creation |
//! | QR Code | scene ticket issuance, image URL |
//! | JS-SDK | jsapi ticket fetch, `wx.config` signing |
//! | OAuth2 | authorize URL, code exchange, refresh, SNS profile |
//! | Template | template message dispatch |
//! | Payment | unified order, order query, client pay sign |
//! | Mini Program | code2Session, code image generation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wechat_sdk::api::{JsApi, JsConfig, TokenApi};
//! use wechat_sdk::client::WechatClient;
//! use wechat_sdk::types::{AppId, AppSecret};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let appid = AppId::new("wx1234567890abcdef")?;
//!     let secret = AppSecret::new("your_secret")?;
//!     let client = WechatClient::new()?;
//!
//!     let token = TokenApi::new(client.clone())
//!         .get_access_token(&appid, &secret)
//!         .await?;
//!     let ticket = JsApi::new(client)
//!         .get_jsapi_ticket(&token.access_token)
//!         .await?;
//!
//!     let config = JsConfig::generate(&appid, &ticket.ticket, "https://example.com/page");
//!     println!("signature: {}", config.signature);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - API family wrappers (token, user, menu, qrcode, js, oauth2,
//!   template, payment, miniprogram)
//! - [`client`] - HTTP client for API calls
//! - [`sign`] - Canonical signature bases and SHA1/MD5 digests
//! - [`xml`] - Flat XML marshaling for the payment API
//! - [`error`] - Error types
//! - [`types`] - Credential newtypes
//!
//! ## Error Handling
//!
//! The SDK uses the [`WechatError`] enum for error handling:
//!
//! ```rust,ignore
//! use wechat_sdk::WechatError;
//!
//! match result {
//!     Ok(response) => { /* handle success */ }
//!     Err(WechatError::Api { code, message }) => {
//!         eprintln!("API error: {} - {}", code, message);
//!     }
//!     Err(WechatError::Http(e)) => {
//!         eprintln!("HTTP error: {}", e);
//!     }
//!     Err(e) => {
//!         eprintln!("Other error: {}", e);
//!     }
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod sign;
pub mod types;
pub mod xml;

pub use client::{WechatClient, WechatClientBuilder};
pub use error::WechatError;
pub use sign::{Params, SignType};
