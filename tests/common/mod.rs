#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::Router;
use serde_json::json;

use casedesk_api::config::AppConfig;
use casedesk_api::ecourts::{CaseProvider, LookupResult, ProviderError, ProviderKind};
use casedesk_api::server::{app, AppState};
use casedesk_api::team::TeamRoster;

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

/// Serve `router` on a free local port for the rest of the test.
pub async fn serve(router: Router) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind 127.0.0.1:{}", port))?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
    })
}

pub async fn spawn_app(
    provider: Option<Arc<dyn CaseProvider>>,
    roster: Option<Arc<dyn TeamRoster>>,
) -> Result<TestServer> {
    let state = AppState::new(AppConfig::development(), provider, roster);
    serve(app(state)).await
}

pub fn sample_case() -> LookupResult {
    LookupResult::found(json!({
        "cnr": "1234567890123456",
        "title": "State vs. Sharma",
        "status": "Pending",
        "next_hearing": "2026-11-02"
    }))
}

pub struct StaticProvider(pub LookupResult);

#[async_trait]
impl CaseProvider for StaticProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Kleopatra
    }

    async fn lookup_by_cnr(&self, _cnr: &str) -> Result<LookupResult, ProviderError> {
        Ok(self.0.clone())
    }
}

pub struct FailingProvider(pub &'static str);

#[async_trait]
impl CaseProvider for FailingProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Kleopatra
    }

    async fn lookup_by_cnr(&self, _cnr: &str) -> Result<LookupResult, ProviderError> {
        Err(ProviderError::Fault(self.0.to_string()))
    }
}
