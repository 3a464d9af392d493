use crate::db;
use crate::forms;
use crate::helpers::ApiError;
use crate::models;
use actix_web::{put, web, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Update owner.", skip(pg_pool))]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::OwnerForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();
    let owner: models::Owner = form.into_inner().into();

    db::owner::update(pg_pool.get_ref(), id, owner)
        .await
        .map_err(ApiError::storage("Failed to update owner"))?
        .map(web::Json)
        .ok_or_else(|| ApiError::NotFound(format!("no owner found with id {}", id)))
}
