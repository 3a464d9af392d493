use crate::db;
use crate::helpers::ApiError;
use actix_web::{get, web, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Get all owners.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    db::owner::fetch_all(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(ApiError::rejected("Failed to get owners"))
}

#[tracing::instrument(name = "Get owner.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();

    db::owner::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(ApiError::storage("Failed to get owner"))?
        .map(web::Json)
        .ok_or_else(|| ApiError::NotFound(format!("no owner found with id {}", id)))
}
