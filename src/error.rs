use thiserror::Error;

/// WeChat SDK error types
#[derive(Debug, Error)]
pub enum WechatError {
    /// Transport-level failure from the HTTP layer, including non-2xx
    /// statuses. Propagated unchanged to the caller.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// WeChat-level error envelope (`errcode` != 0).
    #[error("WeChat API error (code={code}): {message}")]
    Api { code: i32, message: String },

    /// Response body was not valid JSON/XML where one was expected.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    /// Builder misuse or invalid credential material.
    #[error("configuration error: {0}")]
    Config(String),
}

impl WechatError {
    /// Turn a WeChat errcode/errmsg pair into a result.
    ///
    /// Returns `Ok(())` when `code == 0`, otherwise `WechatError::Api`.
    pub fn check_api(code: i32, message: &str) -> Result<(), Self> {
        if code == 0 {
            Ok(())
        } else {
            Err(WechatError::Api {
                code,
                message: message.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_api_success() {
        assert!(WechatError::check_api(0, "ok").is_ok());
    }

    #[test]
    fn test_check_api_error() {
        let err = WechatError::check_api(40013, "invalid appid").unwrap_err();
        match err {
            WechatError::Api { code, message } => {
                assert_eq!(code, 40013);
                assert_eq!(message, "invalid appid");
            }
            _ => panic!("expected WechatError::Api"),
        }
    }

    #[test]
    fn test_display_formats() {
        let err = WechatError::Api {
            code: -1,
            message: "system error".to_string(),
        };
        assert_eq!(err.to_string(), "WeChat API error (code=-1): system error");

        let err = WechatError::MalformedResponse("not json".to_string());
        assert!(err.to_string().contains("not json"));
    }
}
