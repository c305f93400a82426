use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A recorded sales touchpoint. `contact_id` and `deal_id` are independently
/// nullable references; an interaction may point at neither, either or both.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interaction {
    pub id: i64,
    pub interaction_type: String,
    pub summary: String,
    pub contact_id: Option<i64>,
    pub deal_id: Option<i64>,
    pub created_at: i64,
    /// Provider payload stored exactly as received, for audit and
    /// re-derivation of insights.
    pub ai_analysis: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ProcessInteractionRequest {
    pub text: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct InteractionsResponse {
    pub interactions: Vec<Interaction>,
}
