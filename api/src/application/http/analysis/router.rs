use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_image::{__path_analyze_image, MAX_IMAGE_SIZE, analyze_image};
use crate::application::http::server::app_state::AppState;

/// Room for the multipart envelope around a maximum size image.
const BODY_LIMIT: usize = MAX_IMAGE_SIZE + 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_image))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyze", state.args.server.root_path),
            post(analyze_image),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
