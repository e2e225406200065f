//! Create a JSAPI unified order and derive the front-end pay signature.
//!
//! Run with:
//! ```sh
//! WECHAT_APPID=wx... WECHAT_MCH_ID=... WECHAT_MCH_KEY=... \
//!     cargo run --example unified_order
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use wechat_sdk::api::{pay_sign, PaymentApi, TradeType, UnifiedOrderRequest};
use wechat_sdk::client::WechatClient;
use wechat_sdk::sign;
use wechat_sdk::types::{AppId, MchId, MchKey};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let appid = AppId::new(std::env::var("WECHAT_APPID")?)?;
    let mch_id = MchId::new(std::env::var("WECHAT_MCH_ID")?)?;
    let mch_key = MchKey::new(std::env::var("WECHAT_MCH_KEY")?)?;

    let client = WechatClient::new()?;

    let order = UnifiedOrderRequest::new(
        appid.clone(),
        mch_id,
        "demo order",
        format!("demo{}", SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs()),
        1,
        "127.0.0.1",
        TradeType::Jsapi,
        "https://example.com/notify",
    )
    .extra("openid", "OPENID");

    let result = PaymentApi::new(client)
        .unified_order(&mch_key, order)
        .await?;
    println!("unified order response: {result:#?}");

    if let Some(prepay_id) = result.get("prepayId") {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let nonce = sign::nonce_str();
        let signature = pay_sign(
            &appid,
            &mch_key,
            &timestamp.to_string(),
            &nonce,
            &format!("prepay_id={prepay_id}"),
        );
        println!("paySign: {signature}");
    }

    Ok(())
}
