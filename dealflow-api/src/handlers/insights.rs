use actix_web::{web, HttpResponse, Result as ActixResult};
use insights::{assemble, decode, normalize};
use shared_types::{InsightsResponse, NormalizedAnalysis};
use std::sync::Arc;

use crate::database::interactions as db;
use crate::database::Database;
use crate::handlers::ListQuery;

/// Re-derive insights from the stored interactions. The stored form is the
/// raw provider payload; normalization is cheap and idempotent, so it runs
/// on every read instead of being persisted.
pub async fn list_insights(
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

    let insights = interactions
        .into_iter()
        .map(|interaction| {
            let analysis = match &interaction.ai_analysis {
                Some(raw) => normalize(&decode(raw)),
                None => NormalizedAnalysis::default(),
            };
            assemble(analysis, interaction.summary, interaction.id)
        })
        .collect();

    Ok(HttpResponse::Ok().json(InsightsResponse { insights }))
}
