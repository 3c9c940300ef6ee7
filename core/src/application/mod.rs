use crate::{
    domain::{
        common::{HerdcheckConfig, entities::app_errors::CoreError, services::Service},
        inference::services::LLMHealthInference,
    },
    infrastructure::llm::GeminiLLMClient,
};

pub type HerdcheckService = Service<LLMHealthInference<GeminiLLMClient>>;

pub fn create_service(config: HerdcheckConfig) -> Result<HerdcheckService, CoreError> {
    let client = GeminiLLMClient::new(config.llm)?;

    Ok(Service::new(LLMHealthInference::new(client), config.scratch))
}
