use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Treatment guidance derived from a health assessment.
///
/// Every variant serializes as a flat JSON object carrying a `treatable` flag
/// alongside the variant's own fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Healthy animal, nothing to treat.
    Monitoring(MonitoringAdvice),
    /// Deceased animal.
    Emergency(EmergencyProtocol),
    /// A known treatable condition was found among the key issues.
    Treatment(TreatmentPlan),
    /// Nothing matched; a veterinarian has to look at it.
    Consultation(ConsultationAdvice),
}

impl Recommendation {
    pub fn is_treatable(&self) -> bool {
        matches!(self, Recommendation::Treatment(_))
    }

    pub fn is_emergency(&self) -> bool {
        match self {
            Recommendation::Emergency(_) => true,
            Recommendation::Consultation(advice) => advice.emergency,
            Recommendation::Monitoring(_) | Recommendation::Treatment(_) => false,
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            Recommendation::Monitoring(advice) => advice.urgency,
            Recommendation::Emergency(protocol) => protocol.urgency,
            Recommendation::Treatment(plan) => plan.urgency,
            Recommendation::Consultation(advice) => advice.urgency,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Recommendation::Monitoring(_) => "monitoring",
            Recommendation::Emergency(_) => "emergency",
            Recommendation::Treatment(_) => "treatment",
            Recommendation::Consultation(_) => "consultation",
        }
    }
}

#[derive(Serialize)]
struct Flagged<'a, T: Serialize> {
    treatable: bool,
    #[serde(flatten)]
    inner: &'a T,
}

impl Serialize for Recommendation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let treatable = self.is_treatable();
        match self {
            Recommendation::Monitoring(inner) => Flagged { treatable, inner }.serialize(serializer),
            Recommendation::Emergency(inner) => Flagged { treatable, inner }.serialize(serializer),
            Recommendation::Treatment(inner) => Flagged { treatable, inner }.serialize(serializer),
            Recommendation::Consultation(inner) => {
                Flagged { treatable, inner }.serialize(serializer)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringAdvice {
    pub message: String,
    pub monitoring_advice: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmergencyProtocol {
    pub emergency: bool,
    pub message: String,
    pub immediate_actions: Vec<String>,
    pub prevention: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreatmentPlan {
    pub condition: String,
    pub medications: String,
    pub urgency: Urgency,
    pub doctors: Vec<String>,
    pub home_care: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationAdvice {
    pub emergency: bool,
    pub message: String,
    pub immediate_actions: Vec<String>,
    pub urgency: Urgency,
}
