use crate::db;
use crate::forms;
use crate::helpers::{ApiError, Claims};
use crate::models;
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Add product.", skip(user, pg_pool))]
#[post("")]
pub async fn item(
    user: web::ReqData<Arc<Claims>>,
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let product: models::Product = form.into_inner().into();

    db::product::insert(pg_pool.get_ref(), product)
        .await
        .map(|product| {
            tracing::info!("Product {} created by {}", product.id, user.email);
            HttpResponse::Ok().body("Create Product Successfully.")
        })
        .map_err(ApiError::rejected("Failed to create product"))
}
