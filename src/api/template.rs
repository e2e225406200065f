//! Template message dispatch

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;

/// A single colored value in the template data block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TemplateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            color: None,
        }
    }

    pub fn colored(value: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            color: Some(color.into()),
        }
    }
}

/// Mini Program jump target attached to a template message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiniprogramLink {
    pub appid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagepath: Option<String>,
}

/// A template message addressed to a single follower
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub touser: String,
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miniprogram: Option<MiniprogramLink>,
    pub data: BTreeMap<String, TemplateValue>,
}

impl TemplateMessage {
    pub fn new(touser: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            touser: touser.into(),
            template_id: template_id.into(),
            url: None,
            miniprogram: None,
            data: BTreeMap::new(),
        }
    }

    /// Add a data field under the given template placeholder key.
    pub fn data(mut self, key: impl Into<String>, value: TemplateValue) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Set the click-through URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Response from the template send endpoint
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateMessageResponse {
    /// Message ID assigned by the platform
    #[serde(default)]
    pub msgid: i64,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// Template message API
pub struct TemplateApi {
    client: WechatClient,
}

impl TemplateApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Send a template message.
    ///
    /// POST /cgi-bin/message/template/send
    pub async fn send(
        &self,
        access_token: &str,
        message: &TemplateMessage,
    ) -> Result<TemplateMessageResponse, WechatError> {
        let path = format!("/cgi-bin/message/template/send?access_token={access_token}");

        let response: TemplateMessageResponse = self.client.post(&path, message).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }
}
