use crate::domain::{
    common::entities::app_errors::CoreError,
    prediction::entities::{MAX_BATCH_SIZE, ModelInfo, Prediction},
};

/// Capability shared by the live and mock deployments for image-free predictions
/// and service metadata.
pub trait Predictor: Send + Sync {
    /// Name reported by the liveness endpoint.
    fn service_name(&self) -> &'static str;

    fn model_info(&self) -> ModelInfo;

    fn predict(&self, animal_type: &str) -> Prediction;

    /// Repeats [`Predictor::predict`] `batch_size` times, up to [`MAX_BATCH_SIZE`].
    fn predict_batch(
        &self,
        animal_type: &str,
        batch_size: usize,
    ) -> Result<Vec<Prediction>, CoreError> {
        if batch_size > MAX_BATCH_SIZE {
            return Err(CoreError::BatchTooLarge {
                requested: batch_size,
                max: MAX_BATCH_SIZE,
            });
        }

        Ok((0..batch_size).map(|_| self.predict(animal_type)).collect())
    }
}
