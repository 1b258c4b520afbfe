use crate::models::ModelsInfo;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bhavana_core::PredictionRequest;

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Model selector endpoint
// ============================================================================

pub async fn get_models() -> impl IntoResponse {
    Json(ModelsInfo::current())
}

// ============================================================================
// Prediction endpoint
// ============================================================================

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> impl IntoResponse {
    match state.pipeline.predict_request(&request) {
        Ok(prediction) => (
            StatusCode::OK,
            Json(serde_json::to_value(&prediction).unwrap_or_default()),
        ),
        Err(e) => {
            tracing::error!(model = %request.model, "prediction failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}
