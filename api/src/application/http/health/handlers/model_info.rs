use axum::extract::State;
use herdcheck_core::domain::prediction::ModelInfo;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/model_info",
    tag = "health",
    summary = "Describe the model",
    description = "Static capability and version descriptor of the running predictor",
    responses(
        (status = 200, body = ModelInfo)
    ),
)]
pub async fn model_info(State(state): State<AppState>) -> Result<Response<ModelInfo>, ApiError> {
    Ok(Response::OK(state.predictor.model_info()))
}
