use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum classification confidence required before a health assessment is attempted.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Confidence reported when the provider names one of the supported species.
pub const RECOGNIZED_CONFIDENCE: f64 = 0.95;

/// Confidence reported when the provider answers with something outside the species set.
pub const UNRECOGNIZED_CONFIDENCE: f64 = 0.7;

/// Confidence of the fallback classification used when the provider call fails.
pub const FALLBACK_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Cow,
    Chicken,
    Pig,
    Invalid,
}

impl AnimalType {
    pub const SUPPORTED: [AnimalType; 3] = [AnimalType::Cow, AnimalType::Chicken, AnimalType::Pig];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cow => "cow",
            AnimalType::Chicken => "chicken",
            AnimalType::Pig => "pig",
            AnimalType::Invalid => "invalid",
        }
    }

    /// Interprets a one-word classification reply. Anything that is not exactly a
    /// supported species name (after trimming and lowercasing) is `Invalid`.
    pub fn from_reply(reply: &str) -> Self {
        match reply.trim().to_lowercase().as_str() {
            "cow" => AnimalType::Cow,
            "chicken" => AnimalType::Chicken,
            "pig" => AnimalType::Pig,
            _ => AnimalType::Invalid,
        }
    }

    /// Noun used when addressing the provider about this animal.
    pub fn prompt_noun(&self) -> &'static str {
        match self {
            AnimalType::Invalid => "animal",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ClassificationResult {
    pub animal_type: AnimalType,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(animal_type: AnimalType, confidence: f64) -> Self {
        Self {
            animal_type,
            confidence,
        }
    }

    pub fn from_reply(reply: &str) -> Self {
        match AnimalType::from_reply(reply) {
            AnimalType::Invalid => Self::new(AnimalType::Invalid, UNRECOGNIZED_CONFIDENCE),
            species => Self::new(species, RECOGNIZED_CONFIDENCE),
        }
    }

    /// Result substituted when the provider cannot be reached or errors out.
    pub fn fallback() -> Self {
        Self::new(AnimalType::Cow, FALLBACK_CONFIDENCE)
    }

    pub fn is_confident(&self) -> bool {
        self.confidence >= CONFIDENCE_THRESHOLD
    }
}
