use serde_json::Value;
use tracing::warn;

/// Untyped key-value form of a provider analysis payload, before any field
/// validation. Discarded after normalization.
pub type CandidateAnalysis = serde_json::Map<String, Value>;

/// Why a raw payload could not be decoded. Logged for diagnostics and
/// recovered locally, so callers always get a usable candidate back.
#[derive(Debug, thiserror::Error)]
pub enum DecodeFailure {
    #[error("payload is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("payload is valid JSON but not an object")]
    NotAnObject,
}

/// Parse a raw analysis payload into a candidate map.
///
/// Invalid JSON and non-object top-level values both yield an empty
/// candidate, so downstream normalization can always run and produce the
/// all-defaults analysis.
pub fn decode(raw: &str) -> CandidateAnalysis {
    match try_decode(raw) {
        Ok(candidate) => candidate,
        Err(failure) => {
            warn!("Discarding undecodable analysis payload: {}", failure);
            CandidateAnalysis::new()
        }
    }
}

fn try_decode(raw: &str) -> Result<CandidateAnalysis, DecodeFailure> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeFailure::NotAnObject),
    }
}
