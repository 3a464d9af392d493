use crate::db;
use crate::db::filter::ProductFilter;
use crate::forms;
use crate::helpers::{ApiError, ProductPage};
use actix_web::{get, web, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Get product page.", skip(pg_pool))]
#[get("")]
pub async fn list(
    query: web::Query<forms::PageQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let page = query.page()?;

    db::product::list(pg_pool.get_ref(), &ProductFilter::new(), page.limit, page.offset)
        .await
        .map(|(products, total)| web::Json(ProductPage { products, total }))
        .map_err(ApiError::storage("Failed to get products"))
}

#[tracing::instrument(name = "Get filtered product page.", skip(pg_pool))]
#[get("/filter")]
pub async fn filter(
    query: web::Query<forms::ProductQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let page = query.page()?;
    let product_filter = ProductFilter::new()
        .status(query.status.as_deref())
        .kind(query.kind.as_deref())
        .name_contains(query.name.as_deref());

    db::product::list(pg_pool.get_ref(), &product_filter, page.limit, page.offset)
        .await
        .map(|(products, total)| web::Json(ProductPage { products, total }))
        .map_err(ApiError::storage("Failed to get products"))
}

#[tracing::instrument(name = "Get product.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let (id,) = path.into_inner();

    db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(ApiError::storage(
            "An error occurred while retrieving the product",
        ))?
        .map(web::Json)
        .ok_or_else(|| ApiError::NotFound(format!("no product found with id {}", id)))
}
