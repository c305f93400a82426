use serde_json::Value;
use shared_types::{InterestLevel, NormalizedAnalysis, Sentiment};

use crate::decode::CandidateAnalysis;

/// Map a candidate payload onto the canonical analysis shape.
///
/// Total over any candidate: unknown keys are ignored, wrongly-typed values
/// fall back to the field's default, and out-of-enum labels fall back to
/// neutral sentiment / medium interest. Entity keys arrive snake_case and
/// insight keys PascalCase, matching what the provider is prompted to emit.
pub fn normalize(candidate: &CandidateAnalysis) -> NormalizedAnalysis {
    NormalizedAnalysis {
        company_name: string_field(candidate, "company_name"),
        contact_first_name: string_field(candidate, "contact_first_name"),
        contact_last_name: string_field(candidate, "contact_last_name"),
        deal_value: string_field(candidate, "deal_value"),
        deal_stage: string_field(candidate, "deal_stage"),
        overall_sentiment: candidate
            .get("OverallSentiment")
            .and_then(Value::as_str)
            .and_then(Sentiment::from_label)
            .unwrap_or_default(),
        level_of_interest: candidate
            .get("LevelOfInterest")
            .and_then(Value::as_str)
            .and_then(InterestLevel::from_label)
            .unwrap_or_default(),
        key_concerns: string_list_field(candidate, "KeyConcernsOrObjectionsRaised"),
        suggested_next_steps: string_list_field(candidate, "SuggestedNextSteps"),
    }
}

fn string_field(candidate: &CandidateAnalysis, key: &str) -> Option<String> {
    match candidate.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// The provider is not contractually guaranteed to emit a list even when a
/// field is conceptually one; a bare non-empty string counts as a
/// one-element list, anything else as empty.
fn string_list_field(candidate: &CandidateAnalysis, key: &str) -> Vec<String> {
    match candidate.get(key) {
        Some(Value::Array(items)) => items.iter().map(element_to_string).collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn element_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use serde_json::json;

    fn candidate(value: Value) -> CandidateAnalysis {
        match value {
            Value::Object(map) => map,
            _ => panic!("candidate fixtures must be JSON objects"),
        }
    }

    #[test]
    fn test_well_typed_fields_pass_through_unchanged() {
        let analysis = normalize(&candidate(json!({
            "company_name": "Acme Corp",
            "contact_first_name": "John",
            "contact_last_name": "Smith",
            "deal_value": "$500k",
            "deal_stage": "Negotiation",
            "OverallSentiment": "positive",
            "LevelOfInterest": "high",
            "KeyConcernsOrObjectionsRaised": ["Integration", "Timeline"],
            "SuggestedNextSteps": ["Schedule technical deep dive"]
        })));

        assert_eq!(analysis.company_name, Some("Acme Corp".to_string()));
        assert_eq!(analysis.contact_first_name, Some("John".to_string()));
        assert_eq!(analysis.contact_last_name, Some("Smith".to_string()));
        assert_eq!(analysis.deal_value, Some("$500k".to_string()));
        assert_eq!(analysis.deal_stage, Some("Negotiation".to_string()));
        assert_eq!(analysis.overall_sentiment, Sentiment::Positive);
        assert_eq!(analysis.level_of_interest, InterestLevel::High);
        assert_eq!(
            analysis.key_concerns,
            vec!["Integration".to_string(), "Timeline".to_string()]
        );
        assert_eq!(
            analysis.suggested_next_steps,
            vec!["Schedule technical deep dive".to_string()]
        );
    }

    #[test]
    fn test_empty_candidate_yields_all_defaults() {
        let analysis = normalize(&CandidateAnalysis::new());
        assert_eq!(analysis, NormalizedAnalysis::default());
    }

    #[test]
    fn test_scalar_fields_reject_non_string_values() {
        let analysis = normalize(&candidate(json!({
            "company_name": 42,
            "contact_first_name": ["John"],
            "contact_last_name": {"value": "Smith"},
            "deal_value": null,
            "deal_stage": ""
        })));

        assert_eq!(analysis.company_name, None);
        assert_eq!(analysis.contact_first_name, None);
        assert_eq!(analysis.contact_last_name, None);
        assert_eq!(analysis.deal_value, None);
        assert_eq!(analysis.deal_stage, None);
    }

    #[test]
    fn test_bare_string_concern_is_wrapped_as_single_element_list() {
        let analysis = normalize(&candidate(json!({
            "KeyConcernsOrObjectionsRaised": "pricing"
        })));

        assert_eq!(analysis.key_concerns, vec!["pricing".to_string()]);
    }

    #[test]
    fn test_degenerate_list_values_yield_empty_lists() {
        for value in [json!(null), json!(17), json!(""), json!({"a": 1}), json!(true)] {
            let analysis = normalize(&candidate(json!({
                "KeyConcernsOrObjectionsRaised": value.clone(),
                "SuggestedNextSteps": value
            })));

            assert!(analysis.key_concerns.is_empty());
            assert!(analysis.suggested_next_steps.is_empty());
        }
    }

    #[test]
    fn test_list_elements_are_coerced_to_strings_in_order() {
        let analysis = normalize(&candidate(json!({
            "SuggestedNextSteps": ["call back", 2, "send quote"]
        })));

        assert_eq!(
            analysis.suggested_next_steps,
            vec!["call back".to_string(), "2".to_string(), "send quote".to_string()]
        );
    }

    #[test]
    fn test_out_of_enum_labels_fall_back_to_defaults() {
        let analysis = normalize(&candidate(json!({
            "OverallSentiment": "ecstatic",
            "LevelOfInterest": "stratospheric"
        })));

        assert_eq!(analysis.overall_sentiment, Sentiment::Neutral);
        assert_eq!(analysis.level_of_interest, InterestLevel::Medium);
    }

    #[test]
    fn test_enum_matching_is_case_sensitive() {
        let analysis = normalize(&candidate(json!({
            "OverallSentiment": "Positive",
            "LevelOfInterest": "HIGH"
        })));

        assert_eq!(analysis.overall_sentiment, Sentiment::Neutral);
        assert_eq!(analysis.level_of_interest, InterestLevel::Medium);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let analysis = normalize(&candidate(json!({
            "company_name": "Acme Corp",
            "contact_email": "john@acme.example",
            "confidence": 0.93
        })));

        assert_eq!(analysis.company_name, Some("Acme Corp".to_string()));
        assert_eq!(analysis.overall_sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_mixed_entity_and_scalar_concern_payload() {
        // Raw payload with a company name and a bare-string concerns field
        let raw = r#"{"company_name":"Acme","KeyConcernsOrObjectionsRaised":"pricing"}"#;
        let analysis = normalize(&decode(raw));

        assert_eq!(analysis.company_name, Some("Acme".to_string()));
        assert_eq!(analysis.key_concerns, vec!["pricing".to_string()]);
        assert_eq!(analysis.overall_sentiment, Sentiment::Neutral);
        assert!(analysis.suggested_next_steps.is_empty());
    }

    #[test]
    fn test_undecodable_payload_normalizes_to_all_defaults() {
        let analysis = normalize(&decode("not json"));
        assert_eq!(analysis, NormalizedAnalysis::default());
    }

    #[test]
    fn test_insight_fields_from_ordered_payload() {
        let raw = r#"{"OverallSentiment":"positive","LevelOfInterest":"high","SuggestedNextSteps":["call back","send quote"]}"#;
        let analysis = normalize(&decode(raw));

        assert_eq!(analysis.overall_sentiment, Sentiment::Positive);
        assert_eq!(analysis.level_of_interest, InterestLevel::High);
        assert_eq!(
            analysis.suggested_next_steps,
            vec!["call back".to_string(), "send quote".to_string()]
        );
    }
}
