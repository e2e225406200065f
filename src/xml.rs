//! Flat XML marshaling for the payment API
//!
//! Payment requests are `<xml><key>value</key>...</xml>` documents;
//! payment responses come back as one element per line with CDATA-wrapped
//! values. Both directions deal only in flat key/value mappings, so this
//! module is a purpose-built serializer and line scanner rather than a
//! general XML engine.

use crate::error::WechatError;
use crate::sign::Params;

/// Serialize a flat mapping as a single-root XML document.
///
/// Elements are emitted in mapping iteration order (ascending by key) with
/// no escaping, matching the wire format the payment API accepts. Known
/// limitation: values containing `<`, `&`, or `]]>` corrupt the output.
/// The payment fields are numeric or alphanumeric identifiers in practice;
/// callers passing anything else are responsible for pre-sanitizing.
pub fn xmlify(params: &Params) -> String {
    let content: String = params
        .iter()
        .map(|(key, value)| format!("<{key}>{value}</{key}>"))
        .collect();
    format!("<xml>{content}</xml>")
}

/// Parse a CDATA-style payment response into a flat mapping.
///
/// Expects one element per line: `<key><![CDATA[value]]></key>`. Keys are
/// case-folded and camelized (`out_trade_no` becomes `outTradeNo`). Lines
/// that do not match the CDATA pattern, including the `<xml>` envelope
/// lines themselves, contribute nothing; that tolerance is intentional and
/// not an error. A body without an `<xml` root is rejected as malformed.
pub fn from_xml(body: &str) -> Result<Params, WechatError> {
    let trimmed = body.trim();
    if !trimmed.starts_with("<xml") {
        let head: String = trimmed.chars().take(32).collect();
        return Err(WechatError::MalformedResponse(format!(
            "expected an <xml> document, got: {head}"
        )));
    }

    let mut params = Params::new();
    for line in trimmed.lines() {
        let line = line.trim();
        if !line.starts_with('<') {
            continue;
        }
        let Some(cdata_at) = line.find("><![CDATA[") else {
            continue;
        };
        let key = &line[1..cdata_at];
        let rest = &line[cdata_at + "><![CDATA[".len()..];
        let Some(end) = rest.rfind("]]>") else {
            continue;
        };
        let value = &rest[..end];
        if key.is_empty() || value.is_empty() {
            continue;
        }
        params.insert(camelize(key), value.to_string());
    }

    Ok(params)
}

/// Fold a key to lowercase and camel-case its underscore segments.
///
/// `out_trade_no` becomes `outTradeNo`. An underscore with no following
/// alphanumeric character is kept as-is.
pub fn camelize(key: &str) -> String {
    let lower = key.to_ascii_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.peek() {
                Some(&next) if next.is_ascii_alphanumeric() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push('_'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_from(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_xmlify_single_pair() {
        let params = params_from(&[("appid", "wx1234567890abcdef")]);
        assert_eq!(xmlify(&params), "<xml><appid>wx1234567890abcdef</appid></xml>");
    }

    #[test]
    fn test_xmlify_orders_by_key() {
        let params = params_from(&[("total_fee", "100"), ("appid", "wx1")]);
        assert_eq!(
            xmlify(&params),
            "<xml><appid>wx1</appid><total_fee>100</total_fee></xml>"
        );
    }

    #[test]
    fn test_xmlify_empty_mapping() {
        assert_eq!(xmlify(&Params::new()), "<xml></xml>");
    }

    #[test]
    fn test_from_xml_basic() {
        let xml = "<xml>\n<out_trade_no><![CDATA[123]]></out_trade_no>\n</xml>";
        let params = from_xml(xml).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["outTradeNo"], "123");
    }

    #[test]
    fn test_from_xml_multiple_fields() {
        let xml = concat!(
            "<xml>\n",
            "<return_code><![CDATA[SUCCESS]]></return_code>\n",
            "<return_msg><![CDATA[OK]]></return_msg>\n",
            "<prepay_id><![CDATA[wx201508061253461234]]></prepay_id>\n",
            "</xml>"
        );
        let params = from_xml(xml).unwrap();
        assert_eq!(params["returnCode"], "SUCCESS");
        assert_eq!(params["returnMsg"], "OK");
        assert_eq!(params["prepayId"], "wx201508061253461234");
    }

    #[test]
    fn test_from_xml_skips_non_cdata_lines() {
        let xml = concat!(
            "<xml>\n",
            "<return_code><![CDATA[SUCCESS]]></return_code>\n",
            "<empty_element></empty_element>\n",
            "garbage line\n",
            "</xml>"
        );
        let params = from_xml(xml).unwrap();
        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("emptyElement"));
    }

    #[test]
    fn test_from_xml_rejects_non_xml_body() {
        let err = from_xml(r#"{"errcode": 0}"#).unwrap_err();
        assert!(matches!(err, WechatError::MalformedResponse(_)));
    }

    #[test]
    fn test_from_xml_value_keeps_inner_brackets() {
        // Greedy match: the value runs to the last ]]> on the line.
        let xml = "<xml>\n<sign><![CDATA[AB]]CD]]></sign>\n</xml>";
        let params = from_xml(xml).unwrap();
        assert_eq!(params["sign"], "AB]]CD");
    }

    #[test]
    fn test_round_trip_with_camelized_keys() {
        let request = params_from(&[
            ("out_trade_no", "20150806125346"),
            ("total_fee", "1"),
            ("mch_id", "10000100"),
        ]);
        let response: String = request
            .iter()
            .map(|(k, v)| format!("<{k}><![CDATA[{v}]]></{k}>\n"))
            .collect();
        let response = format!("<xml>\n{response}</xml>");

        let decoded = from_xml(&response).unwrap();
        let expected: Params = request
            .iter()
            .map(|(k, v)| (camelize(k), v.clone()))
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("out_trade_no"), "outTradeNo");
        assert_eq!(camelize("OUT_TRADE_NO"), "outTradeNo");
        assert_eq!(camelize("sign"), "sign");
        assert_eq!(camelize("trailing_"), "trailing_");
    }
}
