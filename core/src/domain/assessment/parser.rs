//! Parser for the four-line health report requested from the provider:
//!
//! ```text
//! HEALTH_STATUS: [healthy/unhealthy/critical/dead]
//! CONFIDENCE: [0-100]%
//! OBSERVATIONS: [detailed observations]
//! KEY_ISSUES: [comma-separated list of issues found]
//! ```
//!
//! Lines may come in any order and anything unlabelled is skipped. Parsing never
//! fails; a field that is missing or malformed keeps its default value.

use tracing::debug;

use crate::domain::assessment::entities::{HealthAssessment, HealthStatus};

const STATUS_LABEL: &str = "HEALTH_STATUS:";
const CONFIDENCE_LABEL: &str = "CONFIDENCE:";
const OBSERVATIONS_LABEL: &str = "OBSERVATIONS:";
const KEY_ISSUES_LABEL: &str = "KEY_ISSUES:";

pub fn parse_health_response(text: &str) -> HealthAssessment {
    let mut assessment = HealthAssessment::default();

    for line in text.lines().map(str::trim) {
        if let Some(value) = line.strip_prefix(STATUS_LABEL) {
            let status = strip_brackets(&value.to_lowercase()).trim().to_string();
            assessment.status = HealthStatus::from(status);
            debug!(status = %assessment.status.as_str(), "Extracted health status");
        } else if let Some(value) = line.strip_prefix(CONFIDENCE_LABEL) {
            assessment.confidence = parse_confidence(value);
            debug!(confidence = assessment.confidence, "Extracted confidence");
        } else if let Some(value) = line.strip_prefix(OBSERVATIONS_LABEL) {
            assessment.observations = unwrap_brackets(value.trim()).to_string();
            debug!(
                length = assessment.observations.chars().count(),
                "Extracted observations"
            );
        } else if let Some(value) = line.strip_prefix(KEY_ISSUES_LABEL) {
            assessment.key_issues = strip_brackets(value)
                .split(',')
                .map(str::trim)
                .filter(|issue| !issue.is_empty())
                .map(str::to_string)
                .collect();
            debug!(
                issues_count = assessment.key_issues.len(),
                "Extracted key issues"
            );
        }
    }

    assessment
}

/// Parses a `0-100` integer percentage into `[0, 1]`; unparseable input yields 0.
fn parse_confidence(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '%'))
        .collect();

    match cleaned.trim().parse::<i64>() {
        Ok(percent) => (percent.clamp(0, 100) as f64) / 100.0,
        Err(e) => {
            debug!(raw = %value, error = %e, "Unparseable confidence, defaulting to 0");
            0.0
        }
    }
}

fn strip_brackets(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

fn unwrap_brackets(value: &str) -> &str {
    value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .map(str::trim)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "HEALTH_STATUS: [unhealthy]\n\
        CONFIDENCE: [85]%\n\
        OBSERVATIONS: The cow shows discharge from the left eye.\n\
        KEY_ISSUES: [Eye infection, mild dehydration]";

    #[test]
    fn test_parse_well_formed_reply() {
        let assessment = parse_health_response(WELL_FORMED);
        assert_eq!(assessment.status, HealthStatus::Unhealthy);
        assert_eq!(assessment.confidence, 0.85);
        assert_eq!(
            assessment.observations,
            "The cow shows discharge from the left eye."
        );
        assert_eq!(
            assessment.key_issues,
            vec!["Eye infection".to_string(), "mild dehydration".to_string()]
        );
    }

    #[test]
    fn test_labels_in_any_order_with_noise() {
        let text = "Here is my assessment:\n\
            KEY_ISSUES: lameness\n\
            \n\
              CONFIDENCE: 40%  \n\
            Some trailing remark\n\
            HEALTH_STATUS: Critical";
        let assessment = parse_health_response(text);
        assert_eq!(assessment.status, HealthStatus::Critical);
        assert_eq!(assessment.confidence, 0.4);
        assert_eq!(assessment.observations, "");
        assert_eq!(assessment.key_issues, vec!["lameness".to_string()]);
    }

    #[test]
    fn test_missing_labels_yield_default_record() {
        assert_eq!(parse_health_response(""), HealthAssessment::default());
        assert_eq!(
            parse_health_response("The animal looks fine to me.\nNo structure here."),
            HealthAssessment::default()
        );
    }

    #[test]
    fn test_bracketed_percent_confidence() {
        let assessment = parse_health_response("CONFIDENCE: [85]%");
        assert_eq!(assessment.confidence, 0.85);
    }

    #[test]
    fn test_unparseable_confidence_is_zero() {
        assert_eq!(parse_health_response("CONFIDENCE: abc%").confidence, 0.0);
        assert_eq!(parse_health_response("CONFIDENCE: 85.5%").confidence, 0.0);
        assert_eq!(parse_health_response("CONFIDENCE:").confidence, 0.0);
    }

    #[test]
    fn test_confidence_is_clamped_to_unit_interval() {
        assert_eq!(parse_health_response("CONFIDENCE: 250%").confidence, 1.0);
        assert_eq!(parse_health_response("CONFIDENCE: -5").confidence, 0.0);
    }

    #[test]
    fn test_unknown_status_text_is_preserved() {
        let assessment = parse_health_response("HEALTH_STATUS: [Signs of death]");
        assert_eq!(
            assessment.status,
            HealthStatus::Unrecognized("signs of death".to_string())
        );
    }

    #[test]
    fn test_empty_issue_entries_are_dropped() {
        let assessment = parse_health_response("KEY_ISSUES: [ , parasites,, ]");
        assert_eq!(assessment.key_issues, vec!["parasites".to_string()]);
    }

    #[test]
    fn test_observations_keep_inner_brackets() {
        let assessment =
            parse_health_response("OBSERVATIONS: [Feathers ruffled [left wing] and dull]");
        assert_eq!(
            assessment.observations,
            "Feathers ruffled [left wing] and dull"
        );
    }

    #[test]
    fn test_parser_never_panics_on_garbage() {
        let inputs = [
            "HEALTH_STATUS:",
            "CONFIDENCE: 99999999999999999999999%",
            "KEY_ISSUES:",
            "OBSERVATIONS:]",
            "\u{0}\u{feff}HEALTH_STATUS: \u{1F404}",
            "::::\n[[[]]]\n%%%",
        ];
        for input in inputs {
            let _ = parse_health_response(input);
        }
    }
}
