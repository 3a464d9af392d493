use crate::db;
use crate::forms;
use crate::helpers::ApiError;
use crate::models;
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Add owner.", skip(pg_pool))]
#[post("")]
pub async fn item(
    form: web::Json<forms::OwnerForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let owner: models::Owner = form.into_inner().into();

    db::owner::insert(pg_pool.get_ref(), owner)
        .await
        .map(|owner| {
            tracing::info!("Owner {} created", owner.id);
            HttpResponse::Ok().body("Create New Owner Successfully.")
        })
        .map_err(ApiError::rejected("Failed to create owner"))
}
