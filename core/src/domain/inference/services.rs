use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::domain::{
    assessment::{entities::HealthAssessment, parser::parse_health_response},
    classification::entities::{AnimalType, ClassificationResult},
    common::entities::app_errors::CoreError,
    inference::{
        ports::{HealthInference, LLMClient},
        prompts::{CLASSIFICATION_PROMPT, health_assessment_prompt},
    },
};

/// Adapts a raw [`LLMClient`] to the two analysis tasks. Provider replies are
/// treated as untrusted text; read and provider failures never escape.
pub struct LLMHealthInference<L>
where
    L: LLMClient,
{
    client: L,
}

impl<L> LLMHealthInference<L>
where
    L: LLMClient,
{
    pub fn new(client: L) -> Self {
        Self { client }
    }

    async fn load_image(image_path: &Path) -> Result<(Vec<u8>, String), CoreError> {
        let data = tokio::fs::read(image_path).await.map_err(|e| {
            CoreError::Io(format!(
                "failed to read stored image {}: {}",
                image_path.display(),
                e
            ))
        })?;
        Ok((data, image_mime_type(image_path).to_string()))
    }

    /// Sends the stored image with `prompt`. Read and provider failures share one error path.
    async fn ask(&self, image_path: &Path, prompt: String) -> Result<String, CoreError> {
        let (image_data, mime_type) = Self::load_image(image_path).await?;
        self.client
            .generate_with_image(prompt, image_data, mime_type)
            .await
    }
}

impl<L> HealthInference for LLMHealthInference<L>
where
    L: LLMClient,
{
    #[instrument(skip(self), fields(image_path = %image_path.display()))]
    async fn classify(&self, image_path: &Path) -> Result<ClassificationResult, CoreError> {
        let reply = self
            .ask(image_path, CLASSIFICATION_PROMPT.to_string())
            .await;

        let result = match reply {
            Ok(reply) => {
                debug!(raw_response = %reply, "Raw classification reply");
                let result = ClassificationResult::from_reply(&reply);
                if result.animal_type == AnimalType::Invalid {
                    warn!(detected = %reply.trim(), "Classification outside supported species");
                }
                result
            }
            Err(e) => {
                warn!(error = %e, "Classification call failed, using fallback");
                ClassificationResult::fallback()
            }
        };

        info!(
            animal_type = %result.animal_type,
            confidence = result.confidence,
            "Animal classified"
        );
        Ok(result)
    }

    #[instrument(skip(self), fields(image_path = %image_path.display(), animal_type = %animal_type))]
    async fn assess(
        &self,
        image_path: &Path,
        animal_type: AnimalType,
    ) -> Result<HealthAssessment, CoreError> {
        let reply = self
            .ask(image_path, health_assessment_prompt(animal_type))
            .await;

        let assessment = match reply {
            Ok(reply) => {
                debug!(raw_response = %reply, "Raw health reply");
                parse_health_response(&reply)
            }
            Err(e) => {
                warn!(error = %e, "Health assessment call failed, status unknown");
                HealthAssessment::unavailable()
            }
        };

        info!(
            status = %assessment.status.as_str(),
            confidence = assessment.confidence,
            issues_count = assessment.key_issues.len(),
            "Health assessed"
        );
        Ok(assessment)
    }
}

/// MIME type for the stored image, derived from its extension.
pub fn image_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{assessment::entities::HealthStatus, inference::ports::MockLLMClient};

    /// Replays canned replies and records the prompts it was given.
    struct ScriptedClient {
        replies: Mutex<Vec<Result<String, CoreError>>>,
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedClient {
        fn new(replies: Vec<Result<String, CoreError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl LLMClient for ScriptedClient {
        async fn generate_with_image(
            &self,
            prompt: String,
            _image_data: Vec<u8>,
            mime_type: String,
        ) -> Result<String, CoreError> {
            self.prompts.lock().unwrap().push((prompt, mime_type));
            self.replies.lock().unwrap().remove(0)
        }
    }

    fn stored_image(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"\xFF\xD8\xFF fake jpeg").unwrap();
        path
    }

    #[tokio::test]
    async fn test_classify_recognized_species() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored_image(&dir, "upload.png");
        let inference =
            LLMHealthInference::new(ScriptedClient::new(vec![Ok("Chicken\n".to_string())]));

        let result = inference.classify(&path).await.unwrap();

        assert_eq!(result, ClassificationResult::new(AnimalType::Chicken, 0.95));
        let prompts = inference.client.prompts.lock().unwrap();
        assert_eq!(prompts[0].0, CLASSIFICATION_PROMPT);
        assert_eq!(prompts[0].1, "image/png");
    }

    #[tokio::test]
    async fn test_classify_unsupported_species_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored_image(&dir, "upload.jpg");

        let mut client = MockLLMClient::new();
        client
            .expect_generate_with_image()
            .times(1)
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(" Goat ".to_string()))));
        let inference = LLMHealthInference::new(client);

        let result = inference.classify(&path).await.unwrap();

        assert_eq!(result, ClassificationResult::new(AnimalType::Invalid, 0.7));
    }

    #[tokio::test]
    async fn test_classify_falls_back_to_cow_on_provider_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored_image(&dir, "upload.jpg");
        let inference = LLMHealthInference::new(ScriptedClient::new(vec![Err(
            CoreError::ExternalServiceError("quota exceeded".to_string()),
        )]));

        let result = inference.classify(&path).await.unwrap();

        assert_eq!(result, ClassificationResult::new(AnimalType::Cow, 0.8));
    }

    #[tokio::test]
    async fn test_unreadable_image_degrades_like_provider_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.jpg");
        let inference = LLMHealthInference::new(ScriptedClient::new(vec![]));

        let classification = inference.classify(&missing).await.unwrap();
        assert_eq!(classification, ClassificationResult::fallback());
        assert_eq!(classification.animal_type, AnimalType::Cow);
        assert_eq!(classification.confidence, 0.8);

        let assessment = inference.assess(&missing, AnimalType::Cow).await.unwrap();
        assert_eq!(assessment, HealthAssessment::unavailable());

        assert!(inference.client.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assess_parses_reply_and_names_species() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored_image(&dir, "upload.jpg");
        let inference = LLMHealthInference::new(ScriptedClient::new(vec![Ok(
            "HEALTH_STATUS: [unhealthy]\nCONFIDENCE: [70]%\nOBSERVATIONS: Limping\nKEY_ISSUES: [Leg injury]"
                .to_string(),
        )]));

        let assessment = inference.assess(&path, AnimalType::Pig).await.unwrap();

        assert_eq!(assessment.status, HealthStatus::Unhealthy);
        assert_eq!(assessment.confidence, 0.7);
        assert_eq!(assessment.key_issues, vec!["Leg injury".to_string()]);
        let prompts = inference.client.prompts.lock().unwrap();
        assert!(prompts[0].0.starts_with("Analyze this pig for health issues."));
    }

    #[tokio::test]
    async fn test_assess_degrades_to_unknown_on_provider_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = stored_image(&dir, "upload.jpg");
        let inference = LLMHealthInference::new(ScriptedClient::new(vec![Err(
            CoreError::ExternalServiceError("timeout".to_string()),
        )]));

        let assessment = inference.assess(&path, AnimalType::Cow).await.unwrap();

        assert_eq!(assessment, HealthAssessment::unavailable());
        assert_eq!(assessment.observations, "Error processing image");
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(image_mime_type(Path::new("a.PNG")), "image/png");
        assert_eq!(image_mime_type(Path::new("a.webp")), "image/webp");
        assert_eq!(image_mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("noext")), "image/jpeg");
    }
}
