//! Repayment planning routes.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use tracing::warn;

use debtpath_core::repayment::{RepaymentEngine, RepaymentRequest};
use debtpath_shared::AppError;

/// Creates the repayment routes.
pub fn routes() -> Router {
    Router::new().route("/repayment/plan", post(calculate_plan))
}

/// POST /repayment/plan
///
/// Runs the repayment simulation and returns the plan verbatim. Validation
/// failures come back as 400 with a stable error code and the engine's
/// message.
async fn calculate_plan(Json(request): Json<RepaymentRequest>) -> impl IntoResponse {
    match RepaymentEngine::plan(&request) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => {
            warn!(error = %e, "Rejected repayment request");
            let app_error = AppError::Validation(e.to_string());
            (
                StatusCode::from_u16(app_error.status_code())
                    .unwrap_or(StatusCode::BAD_REQUEST),
                Json(json!({
                    "error": app_error.error_code(),
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
