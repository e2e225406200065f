//! WeChat Pay: unified order, order query, client pay sign
//!
//! Payment endpoints speak XML and are MD5-signed: the request mapping is
//! canonicalized ([`crate::sign::base_string`]), suffixed with
//! `&key=<merchant key>`, digested, and the uppercase hex digest is added
//! as the `sign` element. Responses come back as CDATA XML and are
//! returned as the camelized flat mapping.

use serde::{Deserialize, Serialize};

use crate::client::WechatClient;
use crate::error::WechatError;
use crate::sign::{self, Params, SignType};
use crate::types::{AppId, MchId, MchKey};
use crate::xml;

/// Transaction type for a unified order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    /// In-app payment inside WeChat (official account / mini program)
    Jsapi,
    /// Scan-to-pay QR code
    Native,
    /// Native mobile app payment
    App,
    /// Mobile web (H5) payment
    Mweb,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Jsapi => "JSAPI",
            TradeType::Native => "NATIVE",
            TradeType::App => "APP",
            TradeType::Mweb => "MWEB",
        }
    }
}

/// Parameters for a unified order.
///
/// The named fields are the ones every order needs. `extras` carries any
/// additional signed fields (`attach`, `time_expire`, `openid` for JSAPI
/// orders, ...); extras are merged over the base mapping before signing,
/// so an extra with a base field's key overrides it.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct UnifiedOrderRequest {
    pub appid: AppId,
    pub mch_id: MchId,
    /// Product description shown on the payment screen
    pub body: String,
    /// Merchant-side order number (unique per merchant)
    pub out_trade_no: String,
    /// Order amount in cents
    pub total_fee: u64,
    /// Client IP the order originates from
    pub spbill_create_ip: String,
    pub trade_type: TradeType,
    /// URL receiving the asynchronous payment notification
    pub notify_url: String,
    /// Additional signed fields, merged over the base mapping
    pub extras: Params,
}

impl UnifiedOrderRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        appid: AppId,
        mch_id: MchId,
        body: impl Into<String>,
        out_trade_no: impl Into<String>,
        total_fee: u64,
        spbill_create_ip: impl Into<String>,
        trade_type: TradeType,
        notify_url: impl Into<String>,
    ) -> Self {
        Self {
            appid,
            mch_id,
            body: body.into(),
            out_trade_no: out_trade_no.into(),
            total_fee,
            spbill_create_ip: spbill_create_ip.into(),
            trade_type,
            notify_url: notify_url.into(),
            extras: Params::new(),
        }
    }

    /// Add an extra signed field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("appid".to_string(), self.appid.as_str().to_string());
        params.insert("mch_id".to_string(), self.mch_id.as_str().to_string());
        params.insert("nonce_str".to_string(), sign::nonce_str());
        params.insert("body".to_string(), self.body);
        params.insert("out_trade_no".to_string(), self.out_trade_no);
        params.insert("total_fee".to_string(), self.total_fee.to_string());
        params.insert("spbill_create_ip".to_string(), self.spbill_create_ip);
        params.insert("trade_type".to_string(), self.trade_type.as_str().to_string());
        params.insert("notify_url".to_string(), self.notify_url);
        for (key, value) in self.extras {
            params.insert(key, value);
        }
        params
    }
}

/// Sign a payment parameter mapping with the merchant key.
///
/// Canonicalizes the mapping, appends `&key=<merchant key>`, and returns
/// the uppercase MD5 digest.
pub fn mch_sign(params: &Params, key: &MchKey) -> String {
    let base = sign::base_string(params);
    sign::sign_string(&format!("{base}&key={}", key.as_str()), SignType::Md5)
}

/// WeChat Pay API
pub struct PaymentApi {
    client: WechatClient,
}

impl PaymentApi {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    /// Register a transaction and obtain a prepay identifier.
    ///
    /// POST /pay/unifiedorder
    ///
    /// Returns the response as a flat mapping with camelized keys
    /// (`prepayId`, `returnCode`, `resultCode`, ...), pass-through and
    /// unvalidated: callers check `returnCode`/`resultCode` themselves.
    pub async fn unified_order(
        &self,
        key: &MchKey,
        request: UnifiedOrderRequest,
    ) -> Result<Params, WechatError> {
        let mut params = request.into_params();
        let signature = mch_sign(&params, key);
        params.insert("sign".to_string(), signature);

        let body = self.client.post_xml("/pay/unifiedorder", xml::xmlify(&params)).await?;
        xml::from_xml(&body)
    }

    /// Query an order by the merchant-side order number.
    ///
    /// POST /pay/orderquery
    pub async fn order_query(
        &self,
        key: &MchKey,
        appid: &AppId,
        mch_id: &MchId,
        out_trade_no: &str,
    ) -> Result<Params, WechatError> {
        let mut params = Params::new();
        params.insert("appid".to_string(), appid.as_str().to_string());
        params.insert("mch_id".to_string(), mch_id.as_str().to_string());
        params.insert("nonce_str".to_string(), sign::nonce_str());
        params.insert("out_trade_no".to_string(), out_trade_no.to_string());

        let signature = mch_sign(&params, key);
        params.insert("sign".to_string(), signature);

        let body = self.client.post_xml("/pay/orderquery", xml::xmlify(&params)).await?;
        xml::from_xml(&body)
    }
}

/// Compute the front-end pay signature for an obtained prepay package.
///
/// Signs `{appId, timeStamp, nonceStr, package, signType: "MD5"}` plus the
/// merchant key; the field names are case-sensitive on the client side.
/// `package` is the `prepay_id=...` string from a unified order.
pub fn pay_sign(
    appid: &AppId,
    key: &MchKey,
    time_stamp: &str,
    nonce_str: &str,
    package: &str,
) -> String {
    let mut params = Params::new();
    params.insert("appId".to_string(), appid.as_str().to_string());
    params.insert("timeStamp".to_string(), time_stamp.to_string());
    params.insert("nonceStr".to_string(), nonce_str.to_string());
    params.insert("package".to_string(), package.to_string());
    params.insert("signType".to_string(), "MD5".to_string());

    let base = sign::base_string(&params);
    sign::sign_string(&format!("{base}&key={}", key.as_str()), SignType::Md5)
}
