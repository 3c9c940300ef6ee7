use std::future::Future;

use crate::domain::{
    analysis::{entities::AnalysisOutcome, value_objects::ImageUpload},
    common::entities::app_errors::CoreError,
};

/// Service trait for the image analysis pipeline
pub trait AnalysisService: Send + Sync {
    /// Stores the upload, classifies it, gates on classification confidence,
    /// assesses health and maps the result to a recommendation. The stored file
    /// is removed before this returns, whatever the outcome.
    fn analyze_upload(
        &self,
        upload: ImageUpload,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;
}
