use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue, Method, Uri,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
};
use herdcheck_core::{
    application::create_service,
    domain::{
        common::HerdcheckConfig,
        prediction::{LegacyPredictor, MockPredictor, Predictor},
    },
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::{
    application::http::{
        analysis::router::analysis_routes,
        health::health_routes,
        prediction::router::prediction_routes,
        server::{api_entities::api_error::ApiError, app_state::AppState, openapi::ApiDoc},
    },
    args::{Args, PredictorMode},
};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let herdcheck_config = HerdcheckConfig::from(args.as_ref().clone());
    let gemini_model = herdcheck_config.llm.gemini_model.clone();
    let service = create_service(herdcheck_config)?;

    if lacks_provider_key(&args) {
        warn!("GEMINI_API_KEY is not set, provider calls will fail and degrade");
    }

    let predictor: Arc<dyn Predictor> = match args.predictor.mode {
        PredictorMode::Live => Arc::new(LegacyPredictor::new(gemini_model)),
        PredictorMode::Mock => Arc::new(MockPredictor::new()),
    };

    Ok(AppState::new(args, service, predictor))
}

/// Only live mode talks to the provider, so only there is a missing key worth a warning.
fn lacks_provider_key(args: &Args) -> bool {
    args.predictor.mode == PredictorMode::Live && args.llm.gemini_api_key.is_empty()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid allowed origin {:?}: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);

    let mut openapi = ApiDoc::merged();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .merge(health_routes(state.clone()))
        .merge(prediction_routes(state.clone()));

    if state.args.predictor.mode == PredictorMode::Live {
        router = router.merge(analysis_routes(state.clone()));
    }

    let router = router
        .fallback(not_found)
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}
