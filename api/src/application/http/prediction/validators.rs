use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Key used when the caller does not name an animal.
pub const DEFAULT_ANIMAL_KEY: &str = "default";

pub const DEFAULT_BATCH_SIZE: usize = 5;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct PredictRequest {
    #[schema(example = "cattle")]
    pub animal_type: Option<String>,
}

impl PredictRequest {
    pub fn animal_key(&self) -> &str {
        self.animal_type.as_deref().unwrap_or(DEFAULT_ANIMAL_KEY)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct BatchPredictRequest {
    #[schema(example = "poultry")]
    pub animal_type: Option<String>,
    #[schema(example = 5)]
    #[validate(range(min = 1, message = "batch_size must be at least 1"))]
    pub batch_size: Option<usize>,
}

impl BatchPredictRequest {
    pub fn animal_key(&self) -> &str {
        self.animal_type.as_deref().unwrap_or(DEFAULT_ANIMAL_KEY)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE)
    }
}
