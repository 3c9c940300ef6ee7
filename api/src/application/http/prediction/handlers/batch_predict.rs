use axum::extract::State;
use herdcheck_core::domain::{common::unix_timestamp, prediction::BatchPrediction};

use crate::application::http::{
    prediction::validators::BatchPredictRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/batch_predict",
    tag = "prediction",
    summary = "Batch of mock predictions",
    description = "Draws `batch_size` predictions (default 5, at most 10). Only mounted in mock mode.",
    responses(
        (status = 200, body = BatchPrediction),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = BatchPredictRequest
)]
pub async fn batch_predict(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BatchPredictRequest>,
) -> Result<Response<BatchPrediction>, ApiError> {
    let results = state
        .predictor
        .predict_batch(payload.animal_key(), payload.batch_size())
        .map_err(|e| {
            tracing::warn!("Rejected batch prediction: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(BatchPrediction {
        batch_size: results.len(),
        results,
        timestamp: unix_timestamp(),
    }))
}
