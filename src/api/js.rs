//! JS-SDK ticket fetch and page-signature payload
//!
//! Front-end pages calling `wx.config` need a payload signed with the
//! short-lived jsapi ticket: SHA1 over the sorted mapping of
//! `{noncestr, timestamp, jsapi_ticket, url}`. No shared secret is
//! involved in this flow.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;
use crate::sign::{self, Params, SignType};
use crate::types::AppId;

/// Response from the jsapi ticket endpoint
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JsTicketResponse {
    /// The jsapi ticket
    #[serde(default)]
    pub ticket: String,
    /// Ticket validity in seconds (typically 7200)
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// Signed payload for `wx.config` on the front end.
///
/// Serializes with the exact field names the JS-SDK expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsConfig {
    #[serde(rename = "appId")]
    pub app_id: String,
    pub timestamp: u64,
    #[serde(rename = "nonceStr")]
    pub nonce_str: String,
    pub signature: String,
}

impl JsConfig {
    /// Sign a page URL with the given timestamp and nonce.
    ///
    /// Deterministic: the same inputs always produce the same signature.
    /// The signature base uses the raw (unencoded) URL, as the JS-SDK
    /// requires.
    pub fn sign(appid: &AppId, jsapi_ticket: &str, url: &str, timestamp: u64, nonce_str: &str) -> Self {
        let mut params = Params::new();
        params.insert("noncestr".to_string(), nonce_str.to_string());
        params.insert("timestamp".to_string(), timestamp.to_string());
        params.insert("jsapi_ticket".to_string(), jsapi_ticket.to_string());
        params.insert("url".to_string(), url.to_string());

        let signature = sign::sign_params(&params, SignType::Sha1);

        Self {
            app_id: appid.as_str().to_string(),
            timestamp,
            nonce_str: nonce_str.to_string(),
            signature,
        }
    }

    /// Sign a page URL with the current time and a fresh nonce.
    pub fn generate(appid: &AppId, jsapi_ticket: &str, url: &str) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_secs();
        Self::sign(appid, jsapi_ticket, url, timestamp, &sign::nonce_str())
    }
}

/// JS-SDK API
pub struct JsApi {
    client: WechatClient,
}

impl JsApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Fetch the jsapi ticket for the given access token.
    ///
    /// GET /cgi-bin/ticket/getticket?type=jsapi
    pub async fn get_jsapi_ticket(&self, access_token: &str) -> Result<JsTicketResponse, WechatError> {
        let path = "/cgi-bin/ticket/getticket";
        let query = [("access_token", access_token), ("type", "jsapi")];

        let response: JsTicketResponse = self.client.get(path, &query).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appid() -> AppId {
        AppId::new("wx1234567890abcdef").unwrap()
    }

    #[test]
    fn test_js_config_deterministic() {
        let a = JsConfig::sign(&appid(), "ticket", "https://example.com", 1000, "abc");
        let b = JsConfig::sign(&appid(), "ticket", "https://example.com", 1000, "abc");
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.signature, a.signature.to_lowercase());
        assert_eq!(a.signature.len(), 40);
    }

    #[test]
    fn test_js_config_signature_covers_url() {
        let a = JsConfig::sign(&appid(), "ticket", "https://example.com/a", 1000, "abc");
        let b = JsConfig::sign(&appid(), "ticket", "https://example.com/b", 1000, "abc");
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_js_config_serialized_field_names() {
        let config = JsConfig::sign(&appid(), "ticket", "https://example.com", 1000, "abc");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["appId"], "wx1234567890abcdef");
        assert_eq!(json["timestamp"], 1000);
        assert_eq!(json["nonceStr"], "abc");
        assert!(json["signature"].is_string());
    }

    #[test]
    fn test_generate_fills_timestamp_and_nonce() {
        let config = JsConfig::generate(&appid(), "ticket", "https://example.com");
        assert!(config.timestamp > 1_500_000_000);
        assert_eq!(config.nonce_str.len(), 10);
    }

    #[test]
    fn test_ticket_response_parse() {
        let json = r#"{"errcode": 0, "errmsg": "ok", "ticket": "bxLdikRXVbTPdHSM05e5u5sUoXNKd8-41ZO3MhKoyN5OfkWITDGgnr2fwJ0m9E8NYzWKVZvdVtaUgWvsdshFKA", "expires_in": 7200}"#;
        let response: JsTicketResponse = serde_json::from_str(json).unwrap();
        assert!(response.ticket.starts_with("bxLdikRXVbTPdHSM"));
        assert_eq!(response.expires_in, 7200);
    }
}
