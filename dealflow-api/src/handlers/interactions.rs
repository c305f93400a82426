use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::Value;
use shared_types::{DealStage, InteractionsResponse, ProcessInteractionRequest};
use std::sync::Arc;
use tracing::info;

use crate::database::interactions as db;
use crate::database::{contacts as contacts_db, deals as deals_db};
use crate::database::Database;
use crate::handlers::ListQuery;
use crate::integrations::openai::OpenAiClient;

/// Process a natural language interaction: run the provider calls, persist
/// the interaction with the provider payload stored verbatim, and link or
/// create the CRM records the extracted entities point at.
pub async fn process_interaction(
    database: web::Data<Arc<Database>>,
    provider: web::Data<Arc<OpenAiClient>>,
    request: web::Json<ProcessInteractionRequest>,
) -> ActixResult<HttpResponse> {
    let text = request.into_inner().text;

    let entities = provider
        .extract_entities(&text)
        .await
        .map_err(|e| actix_web::error::ErrorBadGateway(e.to_string()))?;
    info!("Extracted entities: {:?}", entities);

    let summary = provider
        .generate_interaction_summary(&text)
        .await
        .map_err(|e| actix_web::error::ErrorBadGateway(e.to_string()))?;
    info!("Generated summary: {}", summary);

    let analysis = provider
        .analyze_sentiment(&text)
        .await
        .map_err(|e| actix_web::error::ErrorBadGateway(e.to_string()))?;
    info!("Sentiment analysis: {:?}", analysis);

    let conn = database.async_connection.clone();

    // Try to find the contact based on extracted information
    let first_name = string_value(&entities, "contact_first_name");
    let last_name = string_value(&entities, "contact_last_name");
    let contact = contacts_db::find_contact_by_name(
        conn.clone(),
        first_name.as_deref(),
        last_name.as_deref(),
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    if let Some(contact) = &contact {
        info!(
            "Found matching contact: {} {}",
            contact.first_name, contact.last_name
        );
    }

    // The stored payload carries both the insight fields and the extracted
    // entities; entity keys win on collision
    let mut combined = analysis;
    for (key, value) in &entities {
        combined.insert(key.clone(), value.clone());
    }
    let ai_analysis = Value::Object(combined.clone()).to_string();

    // If we found a deal value or stage, create a deal for a matched
    // contact that doesn't have one yet
    let mut deal_id = None;
    let deal_value = string_value(&combined, "deal_value");
    let deal_stage = string_value(&combined, "deal_stage");

    if deal_value.is_some() || deal_stage.is_some() {
        if let Some(contact) = &contact {
            let existing = deals_db::find_deal_by_contact(conn.clone(), contact.id)
                .await
                .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

            if existing.is_none() {
                if let Some(value_str) = &deal_value {
                    let company_name = string_value(&combined, "company_name")
                        .unwrap_or_else(|| "Unknown Company".to_string());

                    let id = deals_db::insert_deal(
                        conn.clone(),
                        format!("Deal with {}", company_name),
                        DealStage::ContactMade,
                        parse_deal_value(value_str),
                        contact.company_id,
                        Some(contact.id),
                        None,
                    )
                    .await
                    .map_err(|e| {
                        actix_web::error::ErrorInternalServerError(e.to_string())
                    })?;

                    info!("Created deal {} for contact {}", id, contact.id);
                    deal_id = Some(id);
                }
            }
        }
    }

    let id = db::insert_interaction(
        conn.clone(),
        "conversation".to_string(),
        summary,
        contact.as_ref().map(|c| c.id),
        deal_id,
        Some(ai_analysis),
    )
    .await
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!(
            "Could not save interaction: {}",
            e
        ))
    })?;

    let interaction = db::get_interaction(conn, id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(interaction))
}

pub async fn list_interactions(
    database: web::Data<Arc<Database>>,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    let interactions = db::list_interactions(
        database.async_connection.clone(),
        query.skip.unwrap_or(0),
        query.limit.unwrap_or(100),
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(InteractionsResponse { interactions }))
}

fn string_value(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Parse provider deal values like "$500k", "$1.2M" or "12,000".
fn parse_deal_value(value: &str) -> Option<f64> {
    let cleaned = value.trim().trim_start_matches('$').replace(',', "");

    let (number, multiplier) = match cleaned.chars().last()? {
        'k' | 'K' => (&cleaned[..cleaned.len() - 1], 1_000.0),
        'm' | 'M' => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    number.trim().parse::<f64>().ok().map(|n| n * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_deal_value() {
        assert_eq!(parse_deal_value("$500k"), Some(500_000.0));
        assert_eq!(parse_deal_value("$1.2M"), Some(1_200_000.0));
        assert_eq!(parse_deal_value("12,000"), Some(12_000.0));
        assert_eq!(parse_deal_value("750"), Some(750.0));
        assert_eq!(parse_deal_value(" $25K "), Some(25_000.0));
    }

    #[test]
    fn test_parse_deal_value_rejects_garbage() {
        assert_eq!(parse_deal_value(""), None);
        assert_eq!(parse_deal_value("$"), None);
        assert_eq!(parse_deal_value("a lot"), None);
        assert_eq!(parse_deal_value("k"), None);
    }

    #[test]
    fn test_string_value_ignores_non_strings() {
        let map = match json!({"deal_value": "$500k", "count": 3, "empty": ""}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        assert_eq!(string_value(&map, "deal_value"), Some("$500k".to_string()));
        assert_eq!(string_value(&map, "count"), None);
        assert_eq!(string_value(&map, "empty"), None);
        assert_eq!(string_value(&map, "missing"), None);
    }
}
