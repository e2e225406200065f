//! Mini Program session and code endpoints
//!
//! `code2Session` exchanges a `wx.login()` code for the user's session,
//! and the code endpoints render Mini Program codes: they answer with raw
//! image bytes on success and a JSON error envelope on failure.

use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;
use crate::types::{AppId, AppSecret};

/// Session from the code2Session endpoint
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionResponse {
    /// User's unique ID under the Mini Program
    #[serde(default)]
    pub openid: String,
    /// Session key for decrypting user data
    #[serde(default)]
    pub session_key: String,
    /// User's unique ID across the WeChat platform (optional)
    #[serde(default)]
    pub unionid: Option<String>,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// RGB line color for generated codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Options for a limited Mini Program code
#[non_exhaustive]
#[derive(Debug, Clone, Default, Serialize)]
pub struct WxaCodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_color: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<LineColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hyaline: Option<bool>,
}

impl WxaCodeRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}

/// Options for an unlimited Mini Program code
#[non_exhaustive]
#[derive(Debug, Clone, Serialize)]
pub struct WxaCodeUnlimitRequest {
    pub scene: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_color: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<LineColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hyaline: Option<bool>,
}

impl WxaCodeUnlimitRequest {
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            page: None,
            width: None,
            auto_color: None,
            line_color: None,
            is_hyaline: None,
        }
    }
}

/// Mini Program API
pub struct MiniProgramApi {
    client: WechatClient,
}

impl MiniProgramApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Exchange a `wx.login()` code for the user's session.
    ///
    /// GET /sns/jscode2session
    pub async fn code_to_session(
        &self,
        appid: &AppId,
        secret: &AppSecret,
        js_code: &str,
    ) -> Result<SessionResponse, WechatError> {
        let path = "/sns/jscode2session";
        let query = [
            ("appid", appid.as_str()),
            ("secret", secret.as_str()),
            ("js_code", js_code),
            ("grant_type", "authorization_code"),
        ];

        let response: SessionResponse = self.client.get(path, &query).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }

    /// Generate a Mini Program code (limited usage, up to 100,000 codes).
    ///
    /// POST /wxa/getwxacode
    pub async fn get_wxa_code(
        &self,
        access_token: &str,
        request: &WxaCodeRequest,
    ) -> Result<Vec<u8>, WechatError> {
        let path = format!("/wxa/getwxacode?access_token={access_token}");
        self.client.post_image(&path, request).await
    }

    /// Generate an unlimited Mini Program code (no usage limit).
    ///
    /// POST /wxa/getwxacodeunlimit
    pub async fn get_wxa_code_unlimit(
        &self,
        access_token: &str,
        request: &WxaCodeUnlimitRequest,
    ) -> Result<Vec<u8>, WechatError> {
        let path = format!("/wxa/getwxacodeunlimit?access_token={access_token}");
        self.client.post_image(&path, request).await
    }
}
