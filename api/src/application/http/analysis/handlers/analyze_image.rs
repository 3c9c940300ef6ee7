use axum::extract::{Multipart, State, multipart::MultipartRejection};
use herdcheck_core::domain::analysis::{
    entities::{AnalysisOutcome, AnalysisReport, LOW_CONFIDENCE_MESSAGE},
    ports::AnalysisService,
    value_objects::ImageUpload,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const IMAGE_FIELD: &str = "image";

/// Multipart form accepted by `/analyze`.
#[derive(ToSchema)]
pub struct AnalyzeImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze an animal image",
    description = "Classifies the species in the uploaded `image` file, assesses its health and returns treatment guidance",
    request_body(content = AnalyzeImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalysisReport),
        (status = 400, description = "No usable image in the request", body = ApiErrorResponse),
        (status = 422, description = "Species not recognized with enough confidence", body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<AnalysisReport>, ApiError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::warn!("Analysis request without a multipart body: {}", e);
        ApiError::BadRequest("No image provided".to_string())
    })?;

    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != IMAGE_FIELD {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        if file_name.is_empty() {
            tracing::warn!("Image field without a file name");
            return Err(ApiError::BadRequest("No file selected".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Uploaded image is empty".to_string()));
        }

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        tracing::info!(file_name = %file_name, size = data.len(), "Image received");
        upload = Some(ImageUpload { file_name, data });
        break;
    }

    let upload = upload.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    let outcome = state.service.analyze_upload(upload).await?;
    outcome_response(outcome)
}

/// Turns a pipeline outcome into the reply of `/analyze`.
pub fn outcome_response(outcome: AnalysisOutcome) -> Result<Response<AnalysisReport>, ApiError> {
    match outcome {
        AnalysisOutcome::Completed(report) => Ok(Response::OK(report)),
        AnalysisOutcome::Rejected(classification) => {
            tracing::info!(
                animal_type = %classification.animal_type,
                confidence = classification.confidence,
                "Upload rejected"
            );
            Err(ApiError::UnprocessableEntity(
                LOW_CONFIDENCE_MESSAGE.to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use herdcheck_core::domain::classification::entities::{AnimalType, ClassificationResult};
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn test_low_confidence_is_unprocessable() {
        let outcome =
            AnalysisOutcome::Rejected(ClassificationResult::new(AnimalType::Pig, 0.5));

        let error = outcome_response(outcome).unwrap_err();
        assert_eq!(
            error,
            ApiError::UnprocessableEntity(LOW_CONFIDENCE_MESSAGE.to_string())
        );

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Image not confidently recognized as cow, chicken, or pig."
            })
        );
    }
}
