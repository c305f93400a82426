use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod company;
pub mod contact;
pub mod deal;
pub mod interaction;
pub mod provider;

pub use analysis::{
    Insight, InsightsResponse, InterestLevel, NormalizedAnalysis, Sentiment,
};
pub use company::{CompaniesResponse, Company, CreateCompanyRequest};
pub use contact::{Contact, ContactsResponse, CreateContactRequest};
pub use deal::{CreateDealRequest, Deal, DealStage, DealsResponse};
pub use interaction::{
    Interaction, InteractionsResponse, ProcessInteractionRequest,
};
pub use provider::ProviderError;

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
