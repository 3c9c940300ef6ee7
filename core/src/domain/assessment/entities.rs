use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Observation text used when the provider could not produce an assessment.
pub const UNAVAILABLE_OBSERVATIONS: &str = "Error processing image";

/// Health status as reported by the provider.
///
/// The provider is free-form, so anything outside the known vocabulary is kept
/// verbatim in `Unrecognized` rather than being coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Critical,
    Dead,
    Unknown,
    Unrecognized(String),
}

impl HealthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Critical => "critical",
            HealthStatus::Dead => "dead",
            HealthStatus::Unknown => "unknown",
            HealthStatus::Unrecognized(raw) => raw,
        }
    }

    /// Coarse result reported in the legacy `result` field.
    pub fn scan_result(&self) -> ScanResult {
        match self {
            HealthStatus::Healthy => ScanResult::Healthy,
            HealthStatus::Critical | HealthStatus::Dead => ScanResult::Untreatable,
            HealthStatus::Unhealthy | HealthStatus::Unknown | HealthStatus::Unrecognized(_) => {
                ScanResult::Treatable
            }
        }
    }
}

impl From<&str> for HealthStatus {
    fn from(value: &str) -> Self {
        match value {
            "healthy" => HealthStatus::Healthy,
            "unhealthy" => HealthStatus::Unhealthy,
            "critical" => HealthStatus::Critical,
            "dead" => HealthStatus::Dead,
            "unknown" | "" => HealthStatus::Unknown,
            other => HealthStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for HealthStatus {
    fn from(value: String) -> Self {
        HealthStatus::from(value.as_str())
    }
}

impl From<HealthStatus> for String {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanResult {
    Healthy,
    Treatable,
    Untreatable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthAssessment {
    #[schema(value_type = String, example = "unhealthy")]
    pub status: HealthStatus,
    pub confidence: f64,
    pub observations: String,
    pub key_issues: Vec<String>,
}

impl Default for HealthAssessment {
    fn default() -> Self {
        Self {
            status: HealthStatus::Unknown,
            confidence: 0.0,
            observations: String::new(),
            key_issues: Vec::new(),
        }
    }
}

impl HealthAssessment {
    /// Record returned when the provider call fails.
    pub fn unavailable() -> Self {
        Self {
            observations: UNAVAILABLE_OBSERVATIONS.to_string(),
            ..Self::default()
        }
    }
}
