use std::future::Future;
use std::path::Path;

use crate::domain::{
    assessment::entities::HealthAssessment,
    classification::entities::{AnimalType, ClassificationResult},
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling multimodal AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Image understanding used by the analysis pipeline.
///
/// Implementations absorb provider failures into fallback values; an `Err` is
/// reserved for failures outside the provider (for instance the stored image
/// disappearing).
pub trait HealthInference: Send + Sync {
    fn classify(
        &self,
        image_path: &Path,
    ) -> impl Future<Output = Result<ClassificationResult, CoreError>> + Send;

    fn assess(
        &self,
        image_path: &Path,
        animal_type: AnimalType,
    ) -> impl Future<Output = Result<HealthAssessment, CoreError>> + Send;
}
