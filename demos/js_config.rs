//! Fetch an access token and jsapi ticket, then sign a page URL for
//! `wx.config`.
//!
//! Run with:
//! ```sh
//! WECHAT_APPID=wx... WECHAT_SECRET=... cargo run --example js_config
//! ```

use wechat_sdk::api::{JsApi, JsConfig, TokenApi};
use wechat_sdk::client::WechatClient;
use wechat_sdk::types::{AppId, AppSecret};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let appid = AppId::new(std::env::var("WECHAT_APPID")?)?;
    let secret = AppSecret::new(std::env::var("WECHAT_SECRET")?)?;

    let client = WechatClient::new()?;

    let token = TokenApi::new(client.clone())
        .get_access_token(&appid, &secret)
        .await?;
    println!("access token expires in {}s", token.expires_in);

    let ticket = JsApi::new(client)
        .get_jsapi_ticket(&token.access_token)
        .await?;

    let config = JsConfig::generate(&appid, &ticket.ticket, "https://example.com/page");
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
