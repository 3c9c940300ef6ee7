use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    health_check::{__path_health_check, health_check},
    model_info::{__path_model_info, model_info},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health_check, model_info))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health", state.args.server.root_path),
            get(health_check),
        )
        .route(
            &format!("{}/model_info", state.args.server.root_path),
            get(model_info),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::{application::http::test::test_server, args::PredictorMode};

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let (server, _dir) = test_server(PredictorMode::Live);
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "animal_health_detection");

        let (server, _dir) = test_server(PredictorMode::Mock);
        let body: Value = server.get("/health").await.json();
        assert_eq!(body["service"], "animal_health_detection_mock");
    }

    #[tokio::test]
    async fn test_model_info_live() {
        let (server, _dir) = test_server(PredictorMode::Live);
        let response = server.get("/model_info").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["version"], "2.0.0");
        assert_eq!(body["using_gemini"], true);
        assert_eq!(body["gemini_model"], "gemini-2.0-flash");
        assert_eq!(
            body["supported_animals"],
            serde_json::json!(["cow", "chicken", "pig"])
        );
    }

    #[tokio::test]
    async fn test_model_info_mock_has_no_gemini_model() {
        let (server, _dir) = test_server(PredictorMode::Mock);
        let body: Value = server.get("/model_info").await.json();
        assert_eq!(body["using_gemini"], false);
        assert!(body.get("gemini_model").is_none());
    }
}
