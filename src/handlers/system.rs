// handlers/system.rs - GET / and GET /health
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::server::AppState;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "CaseDesk API",
            "version": version,
            "description": "Legal-practice dashboard backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "ecourts": "POST /api/ecourts/cnr (case lookup by CNR)",
                "route_guard": "POST /api/route-guard/decide",
                "display_name": "GET /api/dashboard/display-name?email=&name=",
            }
        }
    }))
}

/// Liveness plus a summary of which upstreams are configured. Always 200.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let configured = |present: bool| if present { "configured" } else { "missing" };

    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "environment": state.config.environment,
            "provider": configured(state.provider.is_some()),
            "roster": configured(state.roster.is_some()),
        }
    }))
}
