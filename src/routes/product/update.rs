use crate::db;
use crate::forms;
use crate::helpers::{ApiError, Claims};
use crate::models;
use actix_web::{put, web, Responder};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Update product.", skip(user, pg_pool))]
#[put("/{id}")]
pub async fn item(
    user: web::ReqData<Arc<Claims>>,
    path: web::Path<(i32,)>,
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();
    let product: models::Product = form.into_inner().into();

    tracing::debug!("{} updates product {}", user.email, id);
    db::product::update(pg_pool.get_ref(), id, product)
        .await
        .map_err(ApiError::rejected("Failed to update product"))?
        .map(web::Json)
        .ok_or_else(|| ApiError::NotFound(format!("no product found with id {}", id)))
}

/// Updates several products one by one, in request order. Every item must
/// carry an id; updates already applied stay when a later one fails.
#[tracing::instrument(name = "Update product batch.", skip(user, pg_pool))]
#[put("")]
pub async fn bulk(
    user: web::ReqData<Arc<Claims>>,
    form: web::Json<Vec<forms::ProductForm>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let forms = form.into_inner();
    if forms.iter().any(|entry| entry.id.unwrap_or_default() == 0) {
        return Err(ApiError::Validation(
            "Product ID is required for update".to_string(),
        ));
    }

    let mut updated = Vec::with_capacity(forms.len());
    for entry in forms {
        let product: models::Product = entry.into();
        let id = product.id;

        let product = db::product::update(pg_pool.get_ref(), id, product)
            .await
            .map_err(ApiError::storage("Failed to update product"))?
            .ok_or_else(|| ApiError::NotFound(format!("no product found with id {}", id)))?;
        updated.push(product);
    }

    tracing::info!("{} updated {} products", user.email, updated.len());
    Ok(web::Json(updated))
}
