use shared_types::{Insight, NormalizedAnalysis};

/// Combine a normalized analysis with the interaction's stored summary and
/// id into a presentation-ready insight.
///
/// Pure composition with no decoding or defaulting of its own, so
/// re-deriving from the same stored payload always yields an identical
/// insight.
pub fn assemble(
    analysis: NormalizedAnalysis,
    summary: String,
    interaction_id: i64,
) -> Insight {
    Insight {
        interaction_id,
        summary,
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode, normalize};

    #[test]
    fn test_assemble_preserves_inputs() {
        let analysis = NormalizedAnalysis {
            company_name: Some("Acme Corp".to_string()),
            ..Default::default()
        };

        let insight = assemble(analysis.clone(), "Intro call".to_string(), 7);

        assert_eq!(insight.interaction_id, 7);
        assert_eq!(insight.summary, "Intro call");
        assert_eq!(insight.analysis, analysis);
    }

    #[test]
    fn test_rederiving_from_stored_payload_is_idempotent() {
        let raw = r#"{"OverallSentiment":"negative","KeyConcernsOrObjectionsRaised":["budget"],"company_name":"Initech"}"#;
        let summary = "Budget pushback on renewal".to_string();

        let first = assemble(normalize(&decode(raw)), summary.clone(), 3);
        let second = assemble(normalize(&decode(raw)), summary, 3);

        assert_eq!(first, second);
    }
}
