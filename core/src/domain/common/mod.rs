use std::{path::PathBuf, time::Duration};

use chrono::Utc;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct HerdcheckConfig {
    pub llm: LLMConfig,
    pub scratch: ScratchConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
}

/// Where uploaded images live while a request is being processed.
#[derive(Clone, Debug)]
pub struct ScratchConfig {
    pub upload_dir: PathBuf,
}

/// Current time as fractional unix seconds.
pub fn unix_timestamp() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

pub fn unix_seconds() -> i64 {
    Utc::now().timestamp()
}

/// Round a probability to two decimals for presentation.
pub fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
