use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::{AppConfig, ConfigError, PROVIDER_TIMEOUT};

/// Faults raised while talking to the provider. Provider-reported failures
/// (case not found, bad key) are not faults; they come back as a
/// [`LookupResult`] with `success == false`.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Fault(String),

    #[error("eCourts request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("eCourts request failed: {0}")]
    Transport(String),

    #[error("eCourts response could not be decoded: {0}")]
    Decode(String),
}

/// Third-party provider identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Kleopatra,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Kleopatra => "kleopatra",
        }
    }
}

/// Client construction parameters.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub timeout: Duration,
    pub base_url: String,
}

impl ProviderConfig {
    /// Fails closed when no API key is configured.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            provider: ProviderKind::Kleopatra,
            api_key,
            timeout: PROVIDER_TIMEOUT,
            base_url: config.ecourts.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Normalised lookup outcome, relayed to HTTP callers as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LookupResult {
    pub fn found(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failed(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some(message.into()),
        }
    }
}

/// Port for case-by-CNR lookups.
#[async_trait]
pub trait CaseProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn lookup_by_cnr(&self, cnr: &str) -> Result<LookupResult, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_config_requires_key() {
        let config = AppConfig::development();
        assert!(ProviderConfig::from_app_config(&config).is_err());
    }

    #[test]
    fn provider_config_uses_fixed_timeout() {
        let mut config = AppConfig::development();
        config.ecourts.api_key = Some("key".to_string());
        config.ecourts.base_url = "https://example.test/".to_string();

        let provider = ProviderConfig::from_app_config(&config).unwrap();
        assert_eq!(provider.provider, ProviderKind::Kleopatra);
        assert_eq!(provider.timeout, Duration::from_secs(120));
        assert_eq!(provider.base_url, "https://example.test");
    }

    #[test]
    fn failed_result_omits_data() {
        let value = serde_json::to_value(LookupResult::failed("CASE_NOT_FOUND", "nope")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "error": "CASE_NOT_FOUND", "message": "nope" })
        );
    }

    #[test]
    fn timeout_message_names_seconds() {
        let err = ProviderError::Timeout(Duration::from_secs(120));
        assert_eq!(err.to_string(), "eCourts request timed out after 120 seconds");
    }
}
