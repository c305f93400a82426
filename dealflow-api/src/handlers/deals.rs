use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateDealRequest, DealsResponse};
use std::sync::Arc;
use tracing::info;

use crate::database::deals as db;
use crate::database::Database;
use crate::handlers::ListQuery;

pub async fn create_deal(
    database: web::Data<Arc<Database>>,
    request: web::Json<CreateDealRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!("Creating deal: {}", request.title);

    let id = db::insert_deal(
        database.async_connection.clone(),
        request.title,
        request.stage,
        request.value,
        request.company_id,
        request.contact_id,
        request.description,
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let deal = db::get_deal(database.async_connection.clone(), id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(deal))
}

pub async fn list_deals(
    database: web::Data<Arc<Database>>,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    let deals = db::list_deals(
        database.async_connection.clone(),
        query.skip.unwrap_or(0),
        query.limit.unwrap_or(100),
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(DealsResponse { deals }))
}
