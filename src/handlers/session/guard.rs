// handlers/session/guard.rs - POST /api/route-guard/decide handler
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::routing::{decide, GuardDecision};
use crate::session::AuthState;

#[derive(Debug, Deserialize)]
pub struct GuardDecisionRequest {
    pub path: String,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_loading: bool,
}

/// POST /api/route-guard/decide - Evaluate the dashboard route guard
///
/// Expected Input:
/// ```json
/// { "path": "/cases/12", "is_authenticated": false, "is_loading": false }
/// ```
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "class": { "kind": "protected", "area": "cases" },
///     "render": "nothing",
///     "redirect": { "to": "/login", "mode": "replace" }
///   }
/// }
/// ```
pub async fn guard_decide(
    body: Result<Json<GuardDecisionRequest>, JsonRejection>,
) -> ApiResult<GuardDecision> {
    let Json(request) = body.map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;

    let auth = AuthState {
        is_authenticated: request.is_authenticated,
        is_loading: request.is_loading,
    };

    Ok(ApiResponse::success(decide(auth, &request.path)))
}
