use utoipa::OpenApi;

use crate::application::http::{
    analysis::router::AnalysisApiDoc, health::router::HealthApiDoc,
    prediction::router::PredictionApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Herdcheck API",
    description = "Farm animal species classification, health assessment and treatment guidance"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// Document covering every router, with paths relative to the root path.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(PredictionApiDoc::openapi());
        openapi.merge(AnalysisApiDoc::openapi());
        openapi
    }
}
