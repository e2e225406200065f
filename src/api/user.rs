//! Official Account user profile lookup

use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;

/// A follower's profile as returned by the user info endpoints
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserInfo {
    /// 1 when the user follows the account, 0 otherwise. When 0, only
    /// `openid` and `unionid` are populated.
    #[serde(default)]
    pub subscribe: i32,
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub nickname: String,
    /// 1 male, 2 female, 0 unknown
    #[serde(default)]
    pub sex: i32,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub headimgurl: String,
    /// Unix timestamp of the (latest) follow action
    #[serde(default)]
    pub subscribe_time: i64,
    #[serde(default)]
    pub unionid: Option<String>,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub groupid: i32,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

#[derive(Debug, Clone, Serialize)]
struct BatchGetItem<'a> {
    openid: &'a str,
    lang: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct BatchGetRequest<'a> {
    user_list: Vec<BatchGetItem<'a>>,
}

/// Response from the batch user info endpoint
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchUserInfoResponse {
    #[serde(default)]
    pub user_info_list: Vec<UserInfo>,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// Official Account user API
pub struct UserApi {
    client: WechatClient,
}

impl UserApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Look up a single follower's profile.
    ///
    /// GET /cgi-bin/user/info
    pub async fn get_user_info(
        &self,
        access_token: &str,
        openid: &str,
    ) -> Result<UserInfo, WechatError> {
        let path = "/cgi-bin/user/info";
        let query = [
            ("access_token", access_token),
            ("openid", openid),
            ("lang", "zh_CN"),
        ];

        let response: UserInfo = self.client.get(path, &query).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }

    /// Look up up to 100 follower profiles in one call.
    ///
    /// POST /cgi-bin/user/info/batchget
    pub async fn batch_get_user_info(
        &self,
        access_token: &str,
        openids: &[&str],
    ) -> Result<Vec<UserInfo>, WechatError> {
        let path = format!("/cgi-bin/user/info/batchget?access_token={access_token}");
        let body = BatchGetRequest {
            user_list: openids
                .iter()
                .map(|&openid| BatchGetItem {
                    openid,
                    lang: "zh_CN",
                })
                .collect(),
        };

        let response: BatchUserInfoResponse = self.client.post(&path, &body).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response.user_info_list)
    }
}
