use std::path::Path;

use tracing::{info, instrument, warn};

use crate::domain::{
    analysis::{
        entities::{AnalysisOutcome, AnalysisReport, ScratchUpload},
        ports::AnalysisService,
        value_objects::ImageUpload,
    },
    classification::entities::CONFIDENCE_THRESHOLD,
    common::{entities::app_errors::CoreError, services::Service},
    inference::ports::HealthInference,
    recommendation::services::recommend,
};

impl<I> AnalysisService for Service<I>
where
    I: HealthInference,
{
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name, size_bytes = upload.data.len()))]
    async fn analyze_upload(&self, upload: ImageUpload) -> Result<AnalysisOutcome, CoreError> {
        let scratch = ScratchUpload::persist(&self.scratch.upload_dir, &upload).await?;
        info!(path = %scratch.path().display(), "Upload saved");

        let outcome = self.run_pipeline(scratch.path()).await;

        if let Err(e) = scratch.discard().await {
            warn!(error = %e, "Failed to remove scratch upload");
        }

        if let Err(e) = &outcome {
            warn!(error = %e, "Analysis failed");
        }
        outcome
    }
}

impl<I> Service<I>
where
    I: HealthInference,
{
    async fn run_pipeline(&self, image_path: &Path) -> Result<AnalysisOutcome, CoreError> {
        let classification = self.inference.classify(image_path).await?;

        if !classification.is_confident() {
            warn!(
                animal_type = %classification.animal_type,
                confidence = classification.confidence,
                threshold = CONFIDENCE_THRESHOLD,
                "Low confidence classification, rejecting"
            );
            return Ok(AnalysisOutcome::Rejected(classification));
        }

        let assessment = self
            .inference
            .assess(image_path, classification.animal_type)
            .await?;

        let recommendation = recommend(&assessment);
        let report = AnalysisReport::new(classification, assessment, recommendation);

        info!(
            result = ?report.result,
            status = %report.health_assessment.status.as_str(),
            scan_id = report.scan_id,
            "Analysis completed"
        );

        Ok(AnalysisOutcome::Completed(report))
    }
}
