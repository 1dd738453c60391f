// handlers/session/display_name.rs - GET /api/dashboard/display-name handler
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::server::AppState;
use crate::session::SessionUser;
use crate::team::{resolve_display_name, ResolvedName};

#[derive(Debug, Deserialize)]
pub struct DisplayNameQuery {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// GET /api/dashboard/display-name?email=..&name=..
///
/// Resolves the header name for a signed-in user. Roster faults and a
/// missing roster both fall back to the auth-provided name or email; they
/// are never reported as errors.
///
/// Expected Output:
/// ```json
/// { "success": true, "data": { "display_name": "Alice", "source": "roster" } }
/// ```
pub async fn display_name_get(
    State(state): State<AppState>,
    Query(query): Query<DisplayNameQuery>,
) -> ApiResult<ResolvedName> {
    let user = SessionUser {
        email: query.email,
        name: query.name,
    };

    if user.email().is_none() && user.name.as_deref().map_or(true, str::is_empty) {
        return Err(ApiError::bad_request("email or name is required"));
    }

    let resolved = match &state.roster {
        Some(roster) => resolve_display_name(roster.as_ref(), &user).await,
        None => ResolvedName::fallback(user.fallback_display_name()),
    };

    Ok(ApiResponse::success(resolved))
}
