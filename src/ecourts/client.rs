// ecourts/client.rs - reqwest-backed CaseProvider
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::provider::{CaseProvider, LookupResult, ProviderConfig, ProviderError, ProviderKind};

/// Case-by-CNR endpoint, relative to the configured base URL.
pub const CASE_BY_CNR_PATH: &str = "/api/core/live/district-court/case";

/// HTTP client for the third-party eCourts provider.
///
/// One instance is shared by every request; the underlying
/// `reqwest::Client` pools connections and enforces the configured timeout.
pub struct EcourtsClient {
    http: Client,
    config: ProviderConfig,
}

impl EcourtsClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("casedesk-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, CASE_BY_CNR_PATH)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.config.timeout)
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl CaseProvider for EcourtsClient {
    fn kind(&self) -> ProviderKind {
        self.config.provider
    }

    async fn lookup_by_cnr(&self, cnr: &str) -> Result<LookupResult, ProviderError> {
        let cnr = cnr.trim();
        debug!(provider = self.config.provider.as_str(), cnr, "eCourts lookup starting");

        let res = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&json!({ "cnr": cnr }))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = res.status();
        if status.is_success() {
            let data = res.json::<Value>().await.map_err(|e| self.map_send_error(e))?;
            info!(cnr, "eCourts lookup succeeded");
            return Ok(LookupResult::found(data));
        }

        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!(cnr, status = status.as_u16(), error = %e, "failed to read eCourts error body");
                String::new()
            }
        };
        let code = error_code_for_status(status);
        let message = provider_message(&text).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("eCourts provider error")
                .to_string()
        });

        info!(cnr, status = status.as_u16(), code, "eCourts lookup reported failure");
        Ok(LookupResult::failed(code, message))
    }
}

/// Stable codes for provider-reported failures.
pub fn error_code_for_status(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "CASE_NOT_FOUND",
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "UNAUTHORIZED",
        StatusCode::TOO_MANY_REQUESTS => "RATE_LIMITED",
        _ => "API_ERROR",
    }
}

/// Pull a human-readable message out of a provider error body.
fn provider_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(msg) = value.get(key).and_then(Value::as_str) {
                if !msg.trim().is_empty() {
                    return Some(msg.trim().to_string());
                }
            }
        }
    }

    Some(body.to_string())
}
