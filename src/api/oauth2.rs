//! OAuth2 authorization-code flow
//!
//! Builds the authorize URL for the browser redirect, exchanges the
//! returned code for a user-scoped access token, and fetches the SNS user
//! profile. The user-scoped token here is distinct from the global access
//! token in [`crate::api::token`].

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;
use crate::types::{AppId, AppSecret};

const AUTHORIZE_URL: &str = "https://open.weixin.qq.com/connect/oauth2/authorize";

/// Authorization scope for the OAuth2 redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OauthScope {
    /// Silent authorization, yields only the openid
    Base,
    /// Interactive authorization, allows fetching the user profile
    UserInfo,
}

impl OauthScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            OauthScope::Base => "snsapi_base",
            OauthScope::UserInfo => "snsapi_userinfo",
        }
    }
}

/// Build the authorize URL the user's browser is redirected to.
///
/// Pure URL construction, no HTTP call. The redirect URI is
/// percent-encoded as the platform requires.
pub fn authorize_url(appid: &AppId, redirect_uri: &str, scope: OauthScope, state: &str) -> String {
    let encoded_redirect = utf8_percent_encode(redirect_uri, NON_ALPHANUMERIC);
    format!(
        "{AUTHORIZE_URL}?appid={}&redirect_uri={}&response_type=code&scope={}&state={}#wechat_redirect",
        appid.as_str(),
        encoded_redirect,
        scope.as_str(),
        state
    )
}

/// Response from the code exchange and refresh endpoints
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OauthTokenResponse {
    /// User-scoped access token
    #[serde(default)]
    pub access_token: String,
    /// Token validity in seconds
    #[serde(default)]
    pub expires_in: i64,
    /// Token used to refresh the access token (valid for 30 days)
    #[serde(default)]
    pub refresh_token: String,
    /// The authorizing user's openid
    #[serde(default)]
    pub openid: String,
    /// Granted scope
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// SNS user profile (requires the `snsapi_userinfo` scope)
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnsUserInfo {
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub nickname: String,
    /// 1 male, 2 female, 0 unknown
    #[serde(default)]
    pub sex: i32,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub headimgurl: String,
    #[serde(default)]
    pub privilege: Vec<String>,
    #[serde(default)]
    pub unionid: Option<String>,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// OAuth2 API
pub struct OauthApi {
    client: WechatClient,
}

impl OauthApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Exchange an authorization code for a user-scoped access token.
    ///
    /// GET /sns/oauth2/access_token
    pub async fn get_access_token(
        &self,
        appid: &AppId,
        secret: &AppSecret,
        code: &str,
    ) -> Result<OauthTokenResponse, WechatError> {
        let path = "/sns/oauth2/access_token";
        let query = [
            ("appid", appid.as_str()),
            ("secret", secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
        ];

        let response: OauthTokenResponse = self.client.get(path, &query).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }

    /// Refresh a user-scoped access token.
    ///
    /// GET /sns/oauth2/refresh_token
    pub async fn refresh_token(
        &self,
        appid: &AppId,
        refresh_token: &str,
    ) -> Result<OauthTokenResponse, WechatError> {
        let path = "/sns/oauth2/refresh_token";
        let query = [
            ("appid", appid.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        let response: OauthTokenResponse = self.client.get(path, &query).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }

    /// Fetch the authorizing user's profile with a user-scoped token.
    ///
    /// GET /sns/userinfo
    pub async fn get_user_info(
        &self,
        oauth_access_token: &str,
        openid: &str,
    ) -> Result<SnsUserInfo, WechatError> {
        let path = "/sns/userinfo";
        let query = [
            ("access_token", oauth_access_token),
            ("openid", openid),
            ("lang", "zh_CN"),
        ];

        let response: SnsUserInfo = self.client.get(path, &query).await?;

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
    fn test_authorize_url_shape() {
        let url = authorize_url(
            &appid(),
            "https://example.com/callback?from=wx",
            OauthScope::UserInfo,
            "STATE",
        );
        assert!(url.starts_with("https://open.weixin.qq.com/connect/oauth2/authorize?"));
        assert!(url.contains("appid=wx1234567890abcdef"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fexample%2Ecom%2Fcallback%3Ffrom%3Dwx"));
        assert!(url.contains("scope=snsapi_userinfo"));
        assert!(url.contains("state=STATE"));
        assert!(url.ends_with("#wechat_redirect"));
    }

    #[test]
    fn test_scope_strings() {
        assert_eq!(OauthScope::Base.as_str(), "snsapi_base");
        assert_eq!(OauthScope::UserInfo.as_str(), "snsapi_userinfo");
    }

    #[test]
    fn test_token_response_parse() {
        let json = r#"{
            "access_token": "OAUTH_TOKEN",
            "expires_in": 7200,
            "refresh_token": "REFRESH_TOKEN",
            "openid": "OPENID",
            "scope": "snsapi_userinfo"
        }"#;
        let response: OauthTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "OAUTH_TOKEN");
        assert_eq!(response.refresh_token, "REFRESH_TOKEN");
        assert_eq!(response.scope, "snsapi_userinfo");
    }

    #[test]
    fn test_sns_user_info_parse() {
        let json = r#"{
            "openid": "OPENID",
            "nickname": "NICKNAME",
            "sex": 1,
            "province": "PROVINCE",
            "city": "CITY",
            "country": "COUNTRY",
            "headimgurl": "https://thirdwx.qlogo.cn/0",
            "privilege": ["PRIVILEGE1", "PRIVILEGE2"],
            "unionid": "o6_bmasdasdsad6_2sgVt7hMZOPfL"
        }"#;
        let user: SnsUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.nickname, "NICKNAME");
        assert_eq!(user.privilege.len(), 2);
        assert!(user.unionid.is_some());
    }
}
