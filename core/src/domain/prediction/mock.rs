//! Predictor for deployments without an inference provider: outcomes are drawn
//! from fixed per-species distributions so the payloads look plausible.

use std::ops::RangeInclusive;

use rand::{
    Rng,
    distributions::{Distribution, WeightedIndex},
    seq::SliceRandom,
};
use tracing::debug;

use crate::domain::{
    assessment::entities::ScanResult,
    classification::entities::AnimalType,
    common::{round_confidence, unix_timestamp},
    prediction::{
        entities::{
            MODEL_VERSION, ModelInfo, Prediction, SpeciesAccuracy, SpeciesBucket,
            standardize_animal_type,
        },
        ports::Predictor,
    },
    recommendation::entities::Urgency,
};

const OUTCOMES: [ScanResult; 3] = [
    ScanResult::Healthy,
    ScanResult::Treatable,
    ScanResult::Untreatable,
];

const HEALTHY_CONDITIONS: [&str; 4] = [
    "No visible health issues",
    "Normal posture and alertness",
    "Good body condition",
    "Clean coat and clear eyes",
];

const TREATABLE_CONDITIONS: [&str; 5] = [
    "Mild respiratory infection",
    "Minor skin lesion",
    "External parasite infestation",
    "Mild dehydration",
    "Early signs of malnutrition",
];

const UNTREATABLE_CONDITIONS: [&str; 4] = [
    "Severe systemic infection",
    "Advanced organ failure",
    "Critical traumatic injury",
    "Terminal wasting condition",
];

impl SpeciesBucket {
    /// Relative weights for healthy, treatable and untreatable outcomes.
    fn outcome_weights(&self) -> [u32; 3] {
        match self {
            SpeciesBucket::Cattle => [70, 20, 10],
            SpeciesBucket::Poultry => [60, 30, 10],
            SpeciesBucket::Swine => [65, 25, 10],
            SpeciesBucket::Default => [60, 30, 10],
        }
    }
}

fn confidence_range(status: ScanResult) -> RangeInclusive<f64> {
    match status {
        ScanResult::Healthy => 0.85..=0.98,
        ScanResult::Treatable => 0.70..=0.90,
        ScanResult::Untreatable => 0.75..=0.95,
    }
}

fn conditions(status: ScanResult) -> &'static [&'static str] {
    match status {
        ScanResult::Healthy => &HEALTHY_CONDITIONS,
        ScanResult::Treatable => &TREATABLE_CONDITIONS,
        ScanResult::Untreatable => &UNTREATABLE_CONDITIONS,
    }
}

fn advice(status: ScanResult) -> (&'static str, Urgency) {
    match status {
        ScanResult::Healthy => ("Continue regular monitoring", Urgency::Low),
        ScanResult::Treatable => (
            "Consult a veterinarian and start treatment promptly",
            Urgency::Medium,
        ),
        ScanResult::Untreatable => (
            "Isolate the animal and contact veterinary authorities immediately",
            Urgency::High,
        ),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockPredictor;

impl MockPredictor {
    pub fn new() -> Self {
        Self
    }

    fn sample_status<R: Rng + ?Sized>(bucket: SpeciesBucket, rng: &mut R) -> ScanResult {
        WeightedIndex::new(bucket.outcome_weights())
            .map(|index| OUTCOMES[index.sample(rng)])
            .unwrap_or(ScanResult::Healthy)
    }
}

impl Predictor for MockPredictor {
    fn service_name(&self) -> &'static str {
        "animal_health_detection_mock"
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_name: "Farm Animal Health Classifier (mock)".to_string(),
            version: MODEL_VERSION.to_string(),
            supported_animals: AnimalType::SUPPORTED.to_vec(),
            accuracy: SpeciesAccuracy {
                cow: 0.92,
                chicken: 0.90,
                pig: 0.91,
                general: 0.91,
            },
            last_trained: "2025-08-01".to_string(),
            status: "mock".to_string(),
            using_gemini: false,
            gemini_model: None,
        }
    }

    fn predict(&self, animal_type: &str) -> Prediction {
        let mut rng = rand::thread_rng();
        let bucket = SpeciesBucket::from_key(animal_type);

        let status = Self::sample_status(bucket, &mut rng);
        let confidence = round_confidence(rng.gen_range(confidence_range(status)));
        let condition = conditions(status)
            .choose(&mut rng)
            .copied()
            .unwrap_or("No visible health issues");
        let (recommendation, urgency) = advice(status);

        debug!(?bucket, ?status, confidence, condition, "Sampled mock prediction");

        Prediction {
            status,
            confidence,
            animal_type: standardize_animal_type(animal_type),
            condition: condition.to_string(),
            recommendation: recommendation.to_string(),
            urgency,
            timestamp: unix_timestamp(),
            model_version: MODEL_VERSION.to_string(),
        }
    }
}
