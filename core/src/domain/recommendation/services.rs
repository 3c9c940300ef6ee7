use tracing::{debug, info};

use crate::domain::{
    assessment::entities::{HealthAssessment, HealthStatus},
    recommendation::entities::{
        ConsultationAdvice, EmergencyProtocol, MonitoringAdvice, Recommendation, TreatmentPlan,
        Urgency,
    },
};

/// A keyword-matched condition with a known treatment.
struct TreatableCondition {
    keyword: &'static str,
    medications: &'static str,
    urgency: Urgency,
}

/// Checked in order; the first keyword found in an issue wins.
const TREATABLE_CONDITIONS: [TreatableCondition; 5] = [
    TreatableCondition {
        keyword: "infection",
        medications: "Broad-spectrum antibiotics",
        urgency: Urgency::High,
    },
    TreatableCondition {
        keyword: "parasite",
        medications: "Anti-parasitic treatment",
        urgency: Urgency::Medium,
    },
    TreatableCondition {
        keyword: "injury",
        medications: "Pain relief, wound care",
        urgency: Urgency::High,
    },
    TreatableCondition {
        keyword: "dehydration",
        medications: "Electrolyte supplements",
        urgency: Urgency::High,
    },
    TreatableCondition {
        keyword: "malnutrition",
        medications: "Vitamin supplements, balanced feed",
        urgency: Urgency::Medium,
    },
];

const EMERGENCY_ACTIONS: [&str; 4] = [
    "Isolate the area immediately",
    "Contact veterinary authorities",
    "Dispose of carcass properly",
    "Sanitize the environment",
];

const CONSULTATION_ACTIONS: [&str; 4] = [
    "Isolate the animal",
    "Keep comfortable and stress-free",
    "Provide fresh water",
    "Contact veterinarian immediately",
];

const REFERRAL_DOCTORS: [&str; 2] = ["Local Veterinary Clinic", "Animal Health Specialist"];

/// Maps a health assessment to treatment guidance. Pure and deterministic.
pub fn recommend(assessment: &HealthAssessment) -> Recommendation {
    let status = &assessment.status;
    let issues = &assessment.key_issues;

    let death_in_issues = issues.iter().any(|issue| issue.to_lowercase() == "death");
    let death_in_status = status.as_str().to_lowercase().contains("death");
    let is_dead = *status == HealthStatus::Dead || death_in_issues || death_in_status;

    debug!(
        status = %status.as_str(),
        is_dead,
        death_in_issues,
        death_in_status,
        "Death check"
    );

    let recommendation = if *status == HealthStatus::Healthy {
        Recommendation::Monitoring(MonitoringAdvice {
            message: "No treatment needed - animal appears healthy".to_string(),
            monitoring_advice: "Continue regular monitoring".to_string(),
            urgency: Urgency::Low,
        })
    } else if is_dead {
        Recommendation::Emergency(EmergencyProtocol {
            emergency: true,
            message: "Deceased animal - emergency protocol required".to_string(),
            immediate_actions: to_strings(&EMERGENCY_ACTIONS),
            prevention: "Investigate cause to prevent spread to other animals".to_string(),
            urgency: Urgency::High,
        })
    } else if let Some(plan) = find_treatment(issues) {
        Recommendation::Treatment(plan)
    } else {
        let emergency = *status == HealthStatus::Critical;
        Recommendation::Consultation(ConsultationAdvice {
            emergency,
            message: "Professional veterinary consultation required".to_string(),
            immediate_actions: to_strings(&CONSULTATION_ACTIONS),
            urgency: if emergency {
                Urgency::High
            } else {
                Urgency::Medium
            },
        })
    };

    info!(
        kind = recommendation.kind(),
        treatable = recommendation.is_treatable(),
        emergency = recommendation.is_emergency(),
        "Generated recommendation"
    );

    recommendation
}

fn find_treatment(issues: &[String]) -> Option<TreatmentPlan> {
    issues.iter().find_map(|issue| {
        let issue_lower = issue.to_lowercase();
        TREATABLE_CONDITIONS
            .iter()
            .find(|condition| issue_lower.contains(condition.keyword))
            .map(|condition| TreatmentPlan {
                condition: issue.clone(),
                medications: condition.medications.to_string(),
                urgency: condition.urgency,
                doctors: to_strings(&REFERRAL_DOCTORS),
                home_care: "Isolate animal, provide clean water and shelter".to_string(),
            })
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
