use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{ContactsResponse, CreateContactRequest};
use std::sync::Arc;
use tracing::info;

use crate::database::contacts as db;
use crate::database::Database;
use crate::handlers::ListQuery;

pub async fn create_contact(
    database: web::Data<Arc<Database>>,
    request: web::Json<CreateContactRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!(
        "Creating contact: {} {}",
        request.first_name, request.last_name
    );

    let id = db::insert_contact(
        database.async_connection.clone(),
        request.first_name,
        request.last_name,
        request.email,
        request.phone,
        request.position,
        request.company_id,
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let contact = db::get_contact(database.async_connection.clone(), id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn list_contacts(
    database: web::Data<Arc<Database>>,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    let contacts = db::list_contacts(
        database.async_connection.clone(),
        query.skip.unwrap_or(0),
        query.limit.unwrap_or(100),
    )
    .await
    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ContactsResponse { contacts }))
}
