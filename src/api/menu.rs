//! Custom menu creation

use serde::{Deserialize, Serialize};

use crate::api::common::{ApiResponseBase, WechatApiResponse};
use crate::client::WechatClient;
use crate::error::WechatError;

/// A single menu entry.
///
/// Top-level buttons either carry an action themselves or hold up to five
/// `sub_button` children; leaf buttons carry a `type` plus the matching
/// payload field (`key` for click-style buttons, `url` for view buttons).
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuButton {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub button_type: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_button: Option<Vec<MenuButton>>,
}

impl MenuButton {
    /// A `click` button that pushes the given event key.
    pub fn click(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            button_type: Some("click".to_string()),
            name: name.into(),
            key: Some(key.into()),
            url: None,
            sub_button: None,
        }
    }

    /// A `view` button that opens the given URL.
    pub fn view(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            button_type: Some("view".to_string()),
            name: name.into(),
            key: None,
            url: Some(url.into()),
            sub_button: None,
        }
    }

    /// A parent button holding nested sub-buttons.
    pub fn parent(name: impl Into<String>, sub_button: Vec<MenuButton>) -> Self {
        Self {
            button_type: None,
            name: name.into(),
            key: None,
            url: None,
            sub_button: Some(sub_button),
        }
    }
}

/// The full custom menu (up to three top-level buttons)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub button: Vec<MenuButton>,
}

impl Menu {
    pub fn new(button: Vec<MenuButton>) -> Self {
        Self { button }
    }
}

/// Official Account custom menu API
pub struct MenuApi {
    client: WechatClient,
}

impl MenuApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Install the custom menu, replacing any existing one.
    ///
    /// POST /cgi-bin/menu/create
    pub async fn create_menu(&self, access_token: &str, menu: &Menu) -> Result<(), WechatError> {
        let path = format!("/cgi-bin/menu/create?access_token={access_token}");
        let response: ApiResponseBase = self.client.post(&path, menu).await?;
        response.check()
    }
}
