use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Overall sentiment of an interaction as reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Exact, case-sensitive match against the provider's wire label.
    pub fn from_label(label: &str) -> Option<Sentiment> {
        match label {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum InterestLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl InterestLevel {
    pub fn from_label(label: &str) -> Option<InterestLevel> {
        match label {
            "low" => Some(InterestLevel::Low),
            "medium" => Some(InterestLevel::Medium),
            "high" => Some(InterestLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterestLevel::Low => "low",
            InterestLevel::Medium => "medium",
            InterestLevel::High => "high",
        }
    }
}

/// Display-safe form of a provider analysis payload. Every field has a
/// defined value: scalar entity fields are `None` when missing or
/// wrongly-typed, the enums fall back to their defaults, and the two list
/// fields are always real sequences, never a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedAnalysis {
    pub company_name: Option<String>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub deal_value: Option<String>,
    pub deal_stage: Option<String>,
    pub overall_sentiment: Sentiment,
    pub level_of_interest: InterestLevel,
    pub key_concerns: Vec<String>,
    pub suggested_next_steps: Vec<String>,
}

/// One interaction's presentation-ready insight: the normalized analysis
/// together with the stored summary and the owning interaction's id.
/// Recomputed from the stored payload on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    pub interaction_id: i64,
    pub summary: String,
    pub analysis: NormalizedAnalysis,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serialization() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");

        let deserialized: Sentiment = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(deserialized, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_label_matching_is_case_sensitive() {
        assert_eq!(Sentiment::from_label("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("Positive"), None);
        assert_eq!(Sentiment::from_label("ecstatic"), None);
    }

    #[test]
    fn test_interest_level_defaults_to_medium() {
        assert_eq!(InterestLevel::default(), InterestLevel::Medium);
        assert_eq!(InterestLevel::from_label("HIGH"), None);
        assert_eq!(InterestLevel::from_label("high"), Some(InterestLevel::High));
    }

    #[test]
    fn test_normalized_analysis_default_shape() {
        let analysis = NormalizedAnalysis::default();

        assert_eq!(analysis.company_name, None);
        assert_eq!(analysis.overall_sentiment, Sentiment::Neutral);
        assert_eq!(analysis.level_of_interest, InterestLevel::Medium);
        assert!(analysis.key_concerns.is_empty());
        assert!(analysis.suggested_next_steps.is_empty());

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["overall_sentiment"], "neutral");
        assert_eq!(json["key_concerns"], serde_json::json!([]));
    }
}
