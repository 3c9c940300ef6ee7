use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    assessment::entities::ScanResult, classification::entities::AnimalType,
    recommendation::entities::Urgency,
};

pub const MODEL_VERSION: &str = "2.0.0";

/// Largest batch a single `/batch_predict` request may ask for.
pub const MAX_BATCH_SIZE: usize = 10;

/// Label returned for the `default` alias, asking the caller to name a species.
pub const INVALID_ANIMAL_LABEL: &str = "provide valid animal_type (cow, chicken, pig)";

/// Image-free health prediction in the legacy `/predict` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    pub status: ScanResult,
    pub confidence: f64,
    pub animal_type: String,
    pub condition: String,
    pub recommendation: String,
    pub urgency: Urgency,
    pub timestamp: f64,
    pub model_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatchPrediction {
    pub results: Vec<Prediction>,
    pub batch_size: usize,
    pub timestamp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpeciesAccuracy {
    pub cow: f64,
    pub chicken: f64,
    pub pig: f64,
    pub general: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    pub model_name: String,
    pub version: String,
    pub supported_animals: Vec<AnimalType>,
    pub accuracy: SpeciesAccuracy,
    pub last_trained: String,
    pub status: String,
    pub using_gemini: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_model: Option<String>,
}

/// Species group a caller-supplied `animal_type` key falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesBucket {
    Cattle,
    Poultry,
    Swine,
    Default,
}

impl SpeciesBucket {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "cattle" | "cow" => SpeciesBucket::Cattle,
            "poultry" | "chicken" => SpeciesBucket::Poultry,
            "swine" | "pig" => SpeciesBucket::Swine,
            _ => SpeciesBucket::Default,
        }
    }
}

/// Maps the aliases accepted by `/predict` onto a species label.
pub fn standardize_animal_type(key: &str) -> String {
    match key.trim().to_lowercase().as_str() {
        "cattle" | "cow" => AnimalType::Cow.to_string(),
        "poultry" | "chicken" => AnimalType::Chicken.to_string(),
        "swine" | "pig" => AnimalType::Pig.to_string(),
        "default" => INVALID_ANIMAL_LABEL.to_string(),
        _ => AnimalType::Cow.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(standardize_animal_type("cattle"), "cow");
        assert_eq!(standardize_animal_type("Poultry"), "chicken");
        assert_eq!(standardize_animal_type("swine"), "pig");
        assert_eq!(standardize_animal_type("pig"), "pig");
        assert_eq!(standardize_animal_type("default"), INVALID_ANIMAL_LABEL);
        assert_eq!(standardize_animal_type("goat"), "cow");
    }

    #[test]
    fn test_buckets() {
        assert_eq!(SpeciesBucket::from_key("COW"), SpeciesBucket::Cattle);
        assert_eq!(SpeciesBucket::from_key("poultry"), SpeciesBucket::Poultry);
        assert_eq!(SpeciesBucket::from_key("swine"), SpeciesBucket::Swine);
        assert_eq!(SpeciesBucket::from_key("llama"), SpeciesBucket::Default);
    }
}
