//! Credential newtypes
//!
//! Credentials are passed explicitly on every call; the SDK never stores
//! them. The newtypes validate shape once at construction so the API
//! signatures can take them by reference without re-checking.

use serde::{Deserialize, Serialize};

/// WeChat AppID (`wx` prefix, 18 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if !id.starts_with("wx") {
            return Err(format!("AppId must start with 'wx', got {}", id));
        }
        if id.len() != 18 {
            return Err(format!("AppId must be 18 characters, got {}", id.len()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// WeChat AppSecret
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppSecret(String);

impl AppSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, String> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err("AppSecret must not be empty".to_string());
        }
        Ok(Self(secret))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// WeChat Pay merchant ID (numeric)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MchId(String);

impl MchId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("MchId must be a non-empty digit string, got {}", id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// WeChat Pay merchant API key (the shared signing secret)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MchKey(String);

impl MchKey {
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.is_empty() {
            return Err("MchKey must not be empty".to_string());
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_valid() {
        let id = "wx1234567890abcdef".to_string();
        let app_id = AppId::new(id.clone()).unwrap();
        assert_eq!(app_id.as_str(), id);
    }

    #[test]
    fn test_app_id_invalid_length() {
        assert!(AppId::new("wxshort").is_err());
    }

    #[test]
    fn test_app_id_invalid_prefix() {
        let result = AppId::new("ab1234567890abcdef");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must start with 'wx'"));
    }

    #[test]
    fn test_app_secret_empty() {
        assert!(AppSecret::new("").is_err());
        assert!(AppSecret::new("secret1234567890ab").is_ok());
    }

    #[test]
    fn test_mch_id_digits_only() {
        assert!(MchId::new("10000100").is_ok());
        assert!(MchId::new("").is_err());
        assert!(MchId::new("10000100x").is_err());
    }

    #[test]
    fn test_mch_key_not_empty() {
        assert!(MchKey::new("192006250b4c09247ec02edce69f6a2d").is_ok());
        assert!(MchKey::new("").is_err());
    }
}
