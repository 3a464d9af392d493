use crate::db;
use crate::helpers::{ApiError, Claims};
use actix_web::{delete, web, HttpResponse, Responder};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Delete product.", skip(user, pg_pool))]
#[delete("/{id}")]
pub async fn item(
    user: web::ReqData<Arc<Claims>>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();

    let deleted = db::product::delete(pg_pool.get_ref(), id)
        .await
        .map_err(ApiError::storage("Failed to delete product"))?;

    if !deleted {
        return Err(ApiError::NotFound("No matching record found".to_string()));
    }

    tracing::info!("Product {} deleted by {}", id, user.email);
    Ok(HttpResponse::Ok().body("Product deleted successfully."))
}
