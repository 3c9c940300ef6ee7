use std::sync::Arc;

use crate::domain::{common::ScratchConfig, inference::ports::HealthInference};

/// Entry point for the image analysis pipeline.
pub struct Service<I>
where
    I: HealthInference,
{
    pub(crate) inference: Arc<I>,
    pub(crate) scratch: ScratchConfig,
}

impl<I> Service<I>
where
    I: HealthInference,
{
    pub fn new(inference: I, scratch: ScratchConfig) -> Self {
        Self {
            inference: Arc::new(inference),
            scratch,
        }
    }
}

impl<I> Clone for Service<I>
where
    I: HealthInference,
{
    fn clone(&self) -> Self {
        Self {
            inference: Arc::clone(&self.inference),
            scratch: self.scratch.clone(),
        }
    }
}
