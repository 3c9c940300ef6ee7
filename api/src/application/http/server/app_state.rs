use std::sync::Arc;

use herdcheck_core::{application::HerdcheckService, domain::prediction::Predictor};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HerdcheckService,
    pub predictor: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HerdcheckService, predictor: Arc<dyn Predictor>) -> Self {
        Self {
            args,
            service,
            predictor,
        }
    }
}
