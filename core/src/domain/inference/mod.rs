pub mod ports;
pub mod prompts;
pub mod services;

pub use ports::*;
pub use services::LLMHealthInference;
