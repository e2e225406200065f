//! Common API response primitives
//!
//! Most WeChat JSON endpoints return an `errcode` / `errmsg` pair next to
//! the payload fields. Response structs in this crate carry those fields
//! with `#[serde(default)]` and the endpoint wrappers check them through
//! [`WechatError::check_api`]; this module holds the shared pieces.

use serde::{Deserialize, Serialize};

use crate::error::WechatError;

/// Trait for WeChat API responses that carry `errcode` / `errmsg`.
pub trait WechatApiResponse {
    /// Error code from the API response. `0` indicates success.
    fn errcode(&self) -> i32;

    /// Error message from the API response.
    fn errmsg(&self) -> &str;

    /// Check the response for API errors.
    ///
    /// Returns `Ok(())` when `errcode == 0`, otherwise `WechatError::Api`.
    fn check(&self) -> Result<(), WechatError> {
        WechatError::check_api(self.errcode(), self.errmsg())
    }

    /// Returns `true` when the response indicates success (`errcode == 0`).
    fn is_success(&self) -> bool {
        self.errcode() == 0
    }
}

/// Minimal API response carrying only `errcode` and `errmsg`.
///
/// Used for endpoints that return no data beyond success/failure, such as
/// menu creation.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponseBase {
    /// Error code (`0` = success)
    #[serde(default)]
    pub errcode: i32,
    /// Error message
    #[serde(default)]
    pub errmsg: String,
}

impl WechatApiResponse for ApiResponseBase {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}
