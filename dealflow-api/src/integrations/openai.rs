use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::ProviderError;
use tracing::warn;

use crate::config::OpenAiConfig;

const EXTRACT_SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts structured CRM data from text. Always respond with valid JSON matching the exact format specified.";

const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes business interactions concisely.";

const ANALYZE_SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes business interactions. Always respond with valid JSON matching the exact format specified.";

/// Client for the OpenAI chat completions API.
///
/// The api key is optional so the server can start without one; calls made
/// without a key fail with `ProviderError::MissingApiKey`.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        }
    }

    /// Extract entities like company names, contact details, and deal
    /// information from text. Unparseable provider output yields an empty
    /// map, matching the decoder's recovery behavior downstream.
    pub async fn extract_entities(
        &self,
        text: &str,
    ) -> Result<serde_json::Map<String, Value>, ProviderError> {
        let prompt = format!(
            r#"Extract relevant CRM information from the following text.
Return a JSON object with these exact fields (all optional):
- company_name: Company mentioned
- contact_first_name: First name of contact
- contact_last_name: Last name of contact
- contact_email: Email if mentioned
- contact_phone: Phone if mentioned
- deal_value: Monetary value mentioned (e.g., "$500k", "$1.2M")
- deal_stage: Stage of deal (e.g., "Initial Contact", "Proposal", "Negotiation")

Text: {text}"#
        );

        let content = self.chat(EXTRACT_SYSTEM_PROMPT, prompt, true).await?;

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            _ => {
                warn!("Entity extraction returned non-object payload, ignoring");
                Ok(serde_json::Map::new())
            }
        }
    }

    /// Generate a concise summary of an interaction.
    pub async fn generate_interaction_summary(
        &self,
        text: &str,
    ) -> Result<String, ProviderError> {
        let prompt = format!(
            "Summarize the following interaction in a professional, concise manner.\n\
             Focus on key points, action items, and next steps.\n\n\
             Interaction: {text}"
        );

        self.chat(SUMMARY_SYSTEM_PROMPT, prompt, false).await
    }

    /// Analyze the sentiment of an interaction and extract key insights.
    /// Falls back to a neutral analysis when the provider response cannot
    /// be parsed.
    pub async fn analyze_sentiment(
        &self,
        text: &str,
    ) -> Result<serde_json::Map<String, Value>, ProviderError> {
        let prompt = format!(
            r#"Analyze the following interaction and provide insights in a structured format.
Return a JSON object with these exact fields:
- OverallSentiment: (positive, negative, or neutral)
- KeyConcernsOrObjectionsRaised: [array of concerns]
- LevelOfInterest: (high, medium, or low)
- SuggestedNextSteps: [array of specific action items]

Interaction: {text}"#
        );

        let content = self.chat(ANALYZE_SYSTEM_PROMPT, prompt, true).await?;

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            _ => {
                warn!("Sentiment analysis returned unparseable payload, using fallback");
                Ok(fallback_analysis())
            }
        }
    }

    async fn chat(
        &self,
        system_prompt: &str,
        user_prompt: String,
        json_response: bool,
    ) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            response_format: json_response.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

fn fallback_analysis() -> serde_json::Map<String, Value> {
    let fallback = serde_json::json!({
        "OverallSentiment": "neutral",
        "KeyConcernsOrObjectionsRaised": [],
        "LevelOfInterest": "medium",
        "SuggestedNextSteps": ["Follow up on conversation"]
    });

    match fallback {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_analysis_shape() {
        let fallback = fallback_analysis();

        assert_eq!(fallback["OverallSentiment"], "neutral");
        assert_eq!(fallback["LevelOfInterest"], "medium");
        assert_eq!(
            fallback["SuggestedNextSteps"],
            serde_json::json!(["Follow up on conversation"])
        );
    }

    #[tokio::test]
    async fn test_calls_without_api_key_fail_cleanly() {
        let client = OpenAiClient::new(&OpenAiConfig::default(), None);

        let err = client.extract_entities("met with Acme").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
