use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    batch_predict::{__path_batch_predict, batch_predict},
    predict::{__path_predict, predict},
};
use crate::{application::http::server::app_state::AppState, args::PredictorMode};

#[derive(OpenApi)]
#[openapi(paths(predict, batch_predict))]
pub struct PredictionApiDoc;

pub fn prediction_routes(state: AppState) -> Router<AppState> {
    let router = Router::new().route(
        &format!("{}/predict", state.args.server.root_path),
        post(predict),
    );

    match state.args.predictor.mode {
        PredictorMode::Mock => router.route(
            &format!("{}/batch_predict", state.args.server.root_path),
            post(batch_predict),
        ),
        PredictorMode::Live => router,
    }
}
