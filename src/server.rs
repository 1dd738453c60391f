use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::{AppConfig, SecurityConfig};
use crate::ecourts::{CaseProvider, EcourtsClient, ProviderConfig};
use crate::handlers;
use crate::middleware::no_store;
use crate::team::{HttpTeamRoster, TeamRoster};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when no API key is configured; lookups then fail closed.
    pub provider: Option<Arc<dyn CaseProvider>>,
    pub roster: Option<Arc<dyn TeamRoster>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        provider: Option<Arc<dyn CaseProvider>>,
        roster: Option<Arc<dyn TeamRoster>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            roster,
        }
    }

    /// Build the real upstream clients from configuration.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let provider: Option<Arc<dyn CaseProvider>> = match ProviderConfig::from_app_config(&config) {
            Ok(provider_config) => {
                info!(
                    provider = provider_config.provider.as_str(),
                    base_url = %provider_config.base_url,
                    "eCourts provider configured"
                );
                Some(Arc::new(EcourtsClient::new(provider_config)?))
            }
            Err(e) => {
                warn!("{}; CNR lookups will be rejected", e);
                None
            }
        };

        let roster: Option<Arc<dyn TeamRoster>> = match HttpTeamRoster::from_app_config(&config)? {
            Some(roster) => Some(Arc::new(roster)),
            None => {
                info!("TEAM_ROSTER_URL not set; display names use auth-provided values");
                None
            }
        };

        Ok(Self::new(config, provider, roster))
    }
}

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security);

    Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .merge(ecourts_routes())
        .merge(session_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn ecourts_routes() -> Router<AppState> {
    use handlers::ecourts;

    Router::new()
        .route("/api/ecourts/cnr", post(ecourts::cnr_post))
        .layer(from_fn(no_store))
}

fn session_routes() -> Router<AppState> {
    use handlers::session;

    Router::new()
        .route("/api/route-guard/decide", post(session::guard_decide))
        .route("/api/dashboard/display-name", get(session::display_name_get))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
