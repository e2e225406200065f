//! Official Account QR-code ticket issuance
//!
//! Creates scene QR codes: the endpoint returns a ticket that is later
//! exchanged for the actual image through the `showqrcode` URL.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;

const SHOW_QRCODE_URL: &str = "https://mp.weixin.qq.com/cgi-bin/showqrcode";

#[derive(Debug, Clone, Serialize)]
struct Scene {
    scene_id: u64,
}

#[derive(Debug, Clone, Serialize)]
struct ActionInfo {
    scene: Scene,
}

#[derive(Debug, Clone, Serialize)]
struct CreateTicketRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    expire_seconds: Option<u32>,
    action_name: &'a str,
    action_info: ActionInfo,
}

/// Response from the QR-code ticket endpoint
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QrcodeTicketResponse {
    /// Ticket to exchange for the QR image
    #[serde(default)]
    pub ticket: String,
    /// Ticket validity in seconds (absent for permanent codes)
    #[serde(default)]
    pub expire_seconds: Option<u64>,
    /// The URL the QR code resolves to
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub(crate) errcode: i32,
    #[serde(default)]
    pub(crate) errmsg: String,
}

/// Official Account QR-code API
pub struct QrcodeApi {
    client: WechatClient,
}

impl QrcodeApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Create a scene QR-code ticket.
    ///
    /// POST /cgi-bin/qrcode/create
    ///
    /// # Arguments
    /// * `scene_id` - Scene value encoded into the code
    /// * `expire_seconds` - Validity for temporary codes (max 30 days);
    ///   ignored for permanent codes
    /// * `limit` - `true` creates a permanent `QR_LIMIT_SCENE` code,
    ///   `false` a temporary `QR_SCENE` code
    pub async fn create_ticket(
        &self,
        access_token: &str,
        scene_id: u64,
        expire_seconds: Option<u32>,
        limit: bool,
    ) -> Result<QrcodeTicketResponse, WechatError> {
        let path = format!("/cgi-bin/qrcode/create?access_token={access_token}");
        let body = CreateTicketRequest {
            expire_seconds: if limit { None } else { expire_seconds },
            action_name: if limit { "QR_LIMIT_SCENE" } else { "QR_SCENE" },
            action_info: ActionInfo {
                scene: Scene { scene_id },
            },
        };

        let response: QrcodeTicketResponse = self.client.post(&path, &body).await?;

        WechatError::check_api(response.errcode, &response.errmsg)?;

        Ok(response)
    }

    /// Build the image URL for a previously issued ticket.
    ///
    /// Pure URL construction, no HTTP call. The ticket is percent-encoded
    /// for transport.
    pub fn show_qrcode_url(ticket: &str) -> String {
        let encoded = utf8_percent_encode(ticket, NON_ALPHANUMERIC);
        format!("{SHOW_QRCODE_URL}?ticket={encoded}")
    }
}
