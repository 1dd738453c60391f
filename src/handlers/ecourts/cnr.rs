// handlers/ecourts/cnr.rs - POST /api/ecourts/cnr handler
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ecourts::LookupResult;
use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct CnrLookupRequest {
    #[serde(default)]
    pub cnr: Option<Value>,
}

impl CnrLookupRequest {
    /// `null`, `false`, `0` and `""` count as missing. Any other non-string
    /// value is an invalid body.
    fn cnr(self) -> Result<String, ApiError> {
        match self.cnr {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ApiError::MissingCnr),
            Some(Value::String(cnr)) if cnr.is_empty() => Err(ApiError::MissingCnr),
            Some(Value::String(cnr)) => Ok(cnr),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(ApiError::MissingCnr),
            Some(other) => Err(ApiError::invalid_json(format!(
                "cnr must be a string, got {}",
                other
            ))),
        }
    }
}

/// POST /api/ecourts/cnr - Look up a case by CNR number
///
/// Expected Input:
/// ```json
/// { "cnr": "MHAU010012342023" }
/// ```
///
/// The provider's result is relayed unchanged with 200, including results
/// where the provider itself reports `success: false`. Only faults raised
/// while calling the provider become a 500.
///
/// Errors:
/// - 400 `MISSING_CNR`: `cnr` absent, `null`, `false`, `0` or empty
/// - 400 `INVALID_JSON`: body is not a JSON object, or `cnr` is some other non-string
/// - 500 `SERVER_ERROR`: provider fault, message passed through
/// - 503 `PROVIDER_NOT_CONFIGURED`: no API key configured
pub async fn cnr_post(
    State(state): State<AppState>,
    body: Result<Json<CnrLookupRequest>, JsonRejection>,
) -> Result<Json<LookupResult>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;

    let cnr = request.cnr()?;

    let Some(provider) = state.provider.as_ref() else {
        warn!("CNR lookup rejected: eCourts API key is not configured");
        return Err(ApiError::ProviderNotConfigured);
    };

    let request_id = Uuid::new_v4();
    info!(%request_id, %cnr, provider = provider.kind().as_str(), "CNR lookup requested");

    let result = provider.lookup_by_cnr(&cnr).await?;

    info!(%request_id, success = result.success, "CNR lookup finished");
    Ok(Json(result))
}
