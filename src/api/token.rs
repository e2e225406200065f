//! Access token acquisition
//!
//! Single-shot fetch of the Official Account global access token. The SDK
//! does not cache tokens; each call goes straight to the platform and the
//! caller decides how long to hold the result.

use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;
use crate::types::{AppId, AppSecret};

/// Response from the token endpoint
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessTokenResponse {
    /// The access token
    #[serde(default)]
    pub access_token: String,
    /// Token validity in seconds (typically 7200)
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// WeChat access token API
pub struct TokenApi {
    client: WechatClient,
}

impl TokenApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Fetch a fresh global access token.
    ///
    /// GET /cgi-bin/token
    pub async fn get_access_token(
        &self,
        appid: &AppId,
        secret: &AppSecret,
    ) -> Result<AccessTokenResponse, WechatError> {
        let path = "/cgi-bin/token";
        let query = [
            ("grant_type", "client_credential"),
            ("appid", appid.as_str()),
            ("secret", secret.as_str()),
        ];

        let response: AccessTokenResponse = self.client.get(path, &query).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }
}
