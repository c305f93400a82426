/// Errors from the external AI provider. Kept distinct from store errors so
/// callers can degrade to a fallback message instead of a hard failure.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned error status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Provider returned an empty response")]
    EmptyResponse,

    #[error("No OpenAI API key configured. Set api_keys.openai_api_key in api.toml or the OPENAI_API_KEY environment variable")]
    MissingApiKey,
}
