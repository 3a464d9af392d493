use crate::db;
use crate::helpers::ApiError;
use actix_web::{get, web, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Get product types.", skip(pg_pool))]
#[get("/type")]
pub async fn types(pg_pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    db::lookup::fetch_types(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(ApiError::rejected("Failed to get types"))
}

#[tracing::instrument(name = "Get product statuses.", skip(pg_pool))]
#[get("/status")]
pub async fn statuses(pg_pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    db::lookup::fetch_statuses(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(ApiError::rejected("Failed to get statuses"))
}
