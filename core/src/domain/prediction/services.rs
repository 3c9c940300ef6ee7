use tracing::info;

use crate::domain::{
    assessment::entities::ScanResult,
    classification::entities::AnimalType,
    common::unix_timestamp,
    prediction::{
        entities::{MODEL_VERSION, ModelInfo, Prediction, SpeciesAccuracy, standardize_animal_type},
        ports::Predictor,
    },
    recommendation::entities::Urgency,
};

/// Predictor of the live deployment. Without an image there is nothing to assess,
/// so `/predict` answers with a fixed compatibility payload pointing at `/analyze`.
#[derive(Debug, Clone)]
pub struct LegacyPredictor {
    gemini_model: String,
}

impl LegacyPredictor {
    pub fn new(gemini_model: String) -> Self {
        Self { gemini_model }
    }
}

impl Predictor for LegacyPredictor {
    fn service_name(&self) -> &'static str {
        "animal_health_detection"
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_name: "Farm Animal Health Classifier with Gemini".to_string(),
            version: MODEL_VERSION.to_string(),
            supported_animals: AnimalType::SUPPORTED.to_vec(),
            accuracy: SpeciesAccuracy {
                cow: 0.92,
                chicken: 0.90,
                pig: 0.91,
                general: 0.91,
            },
            last_trained: "2025-08-01".to_string(),
            status: "active".to_string(),
            using_gemini: true,
            gemini_model: Some(self.gemini_model.clone()),
        }
    }

    fn predict(&self, animal_type: &str) -> Prediction {
        let prediction = Prediction {
            status: ScanResult::Healthy,
            confidence: 0.85,
            animal_type: standardize_animal_type(animal_type),
            condition: "No assessment possible without image".to_string(),
            recommendation: "Use /analyze endpoint with image for accurate assessment"
                .to_string(),
            urgency: Urgency::Low,
            timestamp: unix_timestamp(),
            model_version: MODEL_VERSION.to_string(),
        };

        info!(animal_type = %prediction.animal_type, "Returning legacy compatibility prediction");
        prediction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{common::entities::app_errors::CoreError, prediction::MAX_BATCH_SIZE};

    #[test]
    fn test_fixed_payload() {
        let prediction = LegacyPredictor::new("gemini-2.0-flash".to_string()).predict("poultry");
        assert_eq!(prediction.status, ScanResult::Healthy);
        assert_eq!(prediction.confidence, 0.85);
        assert_eq!(prediction.animal_type, "chicken");
        assert_eq!(prediction.urgency, Urgency::Low);
        assert_eq!(prediction.model_version, "2.0.0");
        assert!(prediction.timestamp > 0.0);
    }

    #[test]
    fn test_model_info_names_gemini_model() {
        let info = LegacyPredictor::new("gemini-2.0-flash".to_string()).model_info();
        assert!(info.using_gemini);
        assert_eq!(info.gemini_model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(
            info.supported_animals,
            vec![AnimalType::Cow, AnimalType::Chicken, AnimalType::Pig]
        );
    }

    #[test]
    fn test_batch_cap_applies_to_any_predictor() {
        let predictor = LegacyPredictor::new("gemini-2.0-flash".to_string());
        assert_eq!(predictor.predict_batch("cattle", 3).unwrap().len(), 3);
        assert_eq!(
            predictor.predict_batch("cattle", MAX_BATCH_SIZE + 1),
            Err(CoreError::BatchTooLarge {
                requested: 11,
                max: 10
            })
        );
    }
}
