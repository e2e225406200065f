//! WeChat API family modules
//!
//! One module per API family, each a thin wrapper over
//! [`WechatClient`](crate::client::WechatClient):
//!
//! - [`common`] - Shared errcode/errmsg response primitives
//! - [`token`] - Global access token acquisition
//! - [`user`] - Official Account follower profiles (single and batch)
//! - [`menu`] - Custom menu creation
//! - [`qrcode`] - Official Account QR-code ticket issuance
//! - [`js`] - JS-SDK ticket and signed `wx.config` payloads
//! - [`oauth2`] - OAuth2 authorize URL and code exchange
//! - [`template`] - Template message dispatch
//! - [`payment`] - Unified order, order query and client pay sign
//! - [`miniprogram`] - code2Session and Mini Program code images

pub mod common;
pub mod js;
pub mod menu;
pub mod miniprogram;
pub mod oauth2;
pub mod payment;
pub mod qrcode;
pub mod template;
pub mod token;
pub mod user;

pub use common::{ApiResponseBase, WechatApiResponse};
pub use js::{JsApi, JsConfig, JsTicketResponse};
pub use menu::{Menu, MenuApi, MenuButton};
pub use miniprogram::{
    LineColor, MiniProgramApi, SessionResponse, WxaCodeRequest, WxaCodeUnlimitRequest,
};
pub use oauth2::{authorize_url, OauthApi, OauthScope, OauthTokenResponse, SnsUserInfo};
pub use payment::{mch_sign, pay_sign, PaymentApi, TradeType, UnifiedOrderRequest};
pub use qrcode::{QrcodeApi, QrcodeTicketResponse};
pub use template::{
    MiniprogramLink, TemplateApi, TemplateMessage, TemplateMessageResponse, TemplateValue,
};
pub use token::{AccessTokenResponse, TokenApi};
pub use user::{BatchUserInfoResponse, UserApi, UserInfo};
