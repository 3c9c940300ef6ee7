use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::value_objects::ImageUpload,
    assessment::entities::{HealthAssessment, ScanResult},
    classification::entities::{AnimalType, ClassificationResult},
    common::{entities::app_errors::CoreError, unix_seconds},
    recommendation::entities::Recommendation,
};

/// Maximum number of observation characters echoed in the legacy `message` field.
pub const MESSAGE_LIMIT: usize = 100;

pub const LOW_CONFIDENCE_MESSAGE: &str =
    "Image not confidently recognized as cow, chicken, or pig.";

/// Result of running an upload through the pipeline.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Classification confidence was below the threshold; no assessment was made.
    Rejected(ClassificationResult),
    Completed(AnalysisReport),
}

/// Combined classification, health and recommendation payload. Carries the legacy
/// `result`/`confidence`/`scanId`/`message` fields next to the full details.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisReport {
    pub result: ScanResult,
    pub confidence: f64,
    #[serde(rename = "scanId")]
    pub scan_id: i64,
    pub message: String,
    pub animal_type: AnimalType,
    pub classification_confidence: f64,
    pub health_assessment: HealthAssessment,
    #[schema(value_type = Object)]
    pub recommendations: Recommendation,
}

impl AnalysisReport {
    pub fn new(
        classification: ClassificationResult,
        health_assessment: HealthAssessment,
        recommendations: Recommendation,
    ) -> Self {
        Self {
            result: health_assessment.status.scan_result(),
            confidence: health_assessment.confidence,
            scan_id: unix_seconds(),
            message: summarize_observations(&health_assessment.observations),
            animal_type: classification.animal_type,
            classification_confidence: classification.confidence,
            health_assessment,
            recommendations,
        }
    }
}

/// First [`MESSAGE_LIMIT`] characters of the observations, with an ellipsis when cut.
pub fn summarize_observations(observations: &str) -> String {
    if observations.chars().count() > MESSAGE_LIMIT {
        let head: String = observations.chars().take(MESSAGE_LIMIT).collect();
        format!("{}...", head)
    } else {
        observations.to_string()
    }
}

/// An uploaded image stored under a unique name for the duration of one request.
///
/// Call [`ScratchUpload::discard`] when done; if that never happens the file is
/// removed on drop.
#[derive(Debug)]
pub struct ScratchUpload {
    path: PathBuf,
    discarded: bool,
}

impl ScratchUpload {
    pub async fn persist(dir: &Path, upload: &ImageUpload) -> Result<Self, CoreError> {
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(scratch_file_name(&upload.file_name));
        tokio::fs::write(&path, &upload.data).await?;

        debug!(
            path = %path.display(),
            size_bytes = upload.data.len(),
            "Upload written to scratch space"
        );

        Ok(Self {
            path,
            discarded: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn discard(mut self) -> Result<(), CoreError> {
        self.discarded = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Scratch upload removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for ScratchUpload {
    fn drop(&mut self) {
        if self.discarded {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Scratch upload removed on drop"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove scratch upload"),
        }
    }
}

/// Unique file name that keeps only a short alphanumeric extension from the client's name.
fn scratch_file_name(client_name: &str) -> String {
    let extension = Path::new(client_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| (1..=8).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase());

    match extension {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        assessment::entities::HealthStatus, recommendation::services::recommend,
    };

    fn upload(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            data: Bytes::from_static(b"image-bytes"),
        }
    }

    #[test]
    fn test_short_observations_untouched() {
        assert_eq!(summarize_observations("Bright and alert"), "Bright and alert");
        let exactly_limit = "a".repeat(MESSAGE_LIMIT);
        assert_eq!(summarize_observations(&exactly_limit), exactly_limit);
    }

    #[test]
    fn test_long_observations_truncated_with_ellipsis() {
        let long = "é".repeat(150);
        let message = summarize_observations(&long);
        assert_eq!(message.chars().count(), MESSAGE_LIMIT + 3);
        assert!(message.ends_with("..."));
    }

    #[test]
    fn test_report_payload_shape() {
        let assessment = HealthAssessment {
            status: HealthStatus::Critical,
            confidence: 0.9,
            observations: "x".repeat(120),
            key_issues: vec!["collapsed".to_string()],
        };
        let recommendation = recommend(&assessment);
        let report = AnalysisReport::new(
            ClassificationResult::new(AnimalType::Pig, 0.95),
            assessment,
            recommendation,
        );

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["result"], "untreatable");
        assert_eq!(value["confidence"], 0.9);
        assert!(value["scanId"].is_i64());
        assert_eq!(value["message"].as_str().unwrap().chars().count(), 103);
        assert_eq!(value["animal_type"], "pig");
        assert_eq!(value["classification_confidence"], 0.95);
        assert_eq!(value["health_assessment"]["status"], "critical");
        assert_eq!(value["health_assessment"]["key_issues"][0], "collapsed");
        assert_eq!(value["recommendations"]["emergency"], true);
    }

    #[tokio::test]
    async fn test_persist_then_discard() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchUpload::persist(dir.path(), &upload("cow.JPG"))
            .await
            .unwrap();
        let path = scratch.path().to_path_buf();

        assert_eq!(std::fs::read(&path).unwrap(), b"image-bytes");
        assert_eq!(path.extension().unwrap(), "jpg");
        assert_eq!(path.parent().unwrap(), dir.path());

        scratch.discard().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_dropped_upload_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchUpload::persist(dir.path(), &upload("pig.png"))
            .await
            .unwrap();
        let path = scratch.path().to_path_buf();
        drop(scratch);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_discard_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchUpload::persist(dir.path(), &upload("hen.png"))
            .await
            .unwrap();
        std::fs::remove_file(scratch.path()).unwrap();
        assert!(scratch.discard().await.is_ok());
    }

    #[tokio::test]
    async fn test_same_client_name_gets_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let first = ScratchUpload::persist(dir.path(), &upload("photo.jpg"))
            .await
            .unwrap();
        let second = ScratchUpload::persist(dir.path(), &upload("photo.jpg"))
            .await
            .unwrap();
        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_scratch_name_drops_path_and_odd_extensions() {
        let name = scratch_file_name("../../etc/passwd.JPEG");
        assert!(name.ends_with(".jpeg"));
        assert!(!name.contains('/'));

        assert!(!scratch_file_name("archive.tar.gz!").contains('!'));
        assert!(!scratch_file_name("noext").contains('.'));
        assert!(!scratch_file_name("weird.ext with space").contains(' '));
    }
}
