use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{CompaniesResponse, CreateCompanyRequest};
use std::sync::Arc;
use tracing::info;

use crate::database::companies as db;
use crate::database::Database;
use crate::handlers::ListQuery;

pub async fn create_company(
    database: web::Data<Arc<Database>>,
    request: web::Json<CreateCompanyRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!("Creating company: {}", request.name);

    let id = db::insert_company(
        database.async_connection.clone(),
        request.name,
        request.industry,
        request.website,
        request.description,
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let company = db::get_company(database.async_connection.clone(), id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(company))
}

pub async fn list_companies(
    database: web::Data<Arc<Database>>,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    let companies = db::list_companies(
        database.async_connection.clone(),
        query.skip.unwrap_or(0),
        query.limit.unwrap_or(100),
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(CompaniesResponse { companies }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    name: String,
}

pub async fn search_companies(
    database: web::Data<Arc<Database>>,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let companies =
        db::search_companies_by_name(database.async_connection.clone(), &query.name)
            .await
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(CompaniesResponse { companies }))
}
