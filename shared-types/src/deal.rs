use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pipeline stage of a deal, stored as its snake_case wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Lead,
    ContactMade,
    DemoScheduled,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStage::Lead => "lead",
            DealStage::ContactMade => "contact_made",
            DealStage::DemoScheduled => "demo_scheduled",
            DealStage::Proposal => "proposal",
            DealStage::Negotiation => "negotiation",
            DealStage::ClosedWon => "closed_won",
            DealStage::ClosedLost => "closed_lost",
        }
    }

    pub fn from_str(value: &str) -> Option<DealStage> {
        match value {
            "lead" => Some(DealStage::Lead),
            "contact_made" => Some(DealStage::ContactMade),
            "demo_scheduled" => Some(DealStage::DemoScheduled),
            "proposal" => Some(DealStage::Proposal),
            "negotiation" => Some(DealStage::Negotiation),
            "closed_won" => Some(DealStage::ClosedWon),
            "closed_lost" => Some(DealStage::ClosedLost),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub stage: DealStage,
    pub value: Option<f64>,
    pub company_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateDealRequest {
    pub title: String,
    pub stage: DealStage,
    pub value: Option<f64>,
    pub company_id: Option<i64>,
    pub contact_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct DealsResponse {
    pub deals: Vec<Deal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_stage_serialization() {
        let stage = DealStage::ContactMade;
        let json = serde_json::to_string(&stage).unwrap();
        assert_eq!(json, "\"contact_made\"");

        let deserialized: DealStage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, stage);
    }

    #[test]
    fn test_deal_stage_round_trips_through_str() {
        for stage in [
            DealStage::Lead,
            DealStage::ContactMade,
            DealStage::DemoScheduled,
            DealStage::Proposal,
            DealStage::Negotiation,
            DealStage::ClosedWon,
            DealStage::ClosedLost,
        ] {
            assert_eq!(DealStage::from_str(stage.as_str()), Some(stage));
        }
        assert_eq!(DealStage::from_str("won"), None);
    }
}
