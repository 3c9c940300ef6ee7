use axum::extract::State;
use herdcheck_core::domain::prediction::Prediction;

use crate::application::http::{
    prediction::validators::PredictRequest,
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
    path = "/predict",
    tag = "prediction",
    summary = "Image-free health prediction",
    description = "Legacy endpoint answering with a prediction for the given animal type. The body may be omitted. \
        `cattle`, `poultry` and `swine` map to `cow`, `chicken` and `pig`; the species names `cow`, `chicken` and `pig` \
        map to themselves (older deployments answered `cow` for them); `default` or a missing type asks for a valid \
        animal_type; anything else is treated as `cow`.",
    responses(
        (status = 200, body = Prediction),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = PredictRequest
)]
pub async fn predict(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PredictRequest>,
) -> Result<Response<Prediction>, ApiError> {
    let prediction = state.predictor.predict(payload.animal_key());

    tracing::info!(
        animal_type = %prediction.animal_type,
        status = ?prediction.status,
        confidence = prediction.confidence,
        "Prediction served"
    );

    Ok(Response::OK(prediction))
}
