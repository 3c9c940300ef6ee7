use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthCheckResponse)
    ),
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Response<HealthCheckResponse>, ApiError> {
    tracing::debug!("Health check requested");

    Ok(Response::OK(HealthCheckResponse {
        status: "healthy".to_string(),
        service: state.predictor.service_name().to_string(),
    }))
}
