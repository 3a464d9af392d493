use crate::db::filter::{ProductFilter, PRODUCT_COLUMNS, PRODUCT_FROM};
use crate::models;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch product by id.", id);
    let query = format!("{}{} WHERE p.id = $1", PRODUCT_COLUMNS, PRODUCT_FROM);

    sqlx::query_as::<_, models::Product>(&query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product, error: {:?}", err);
            err
        })
}

pub async fn count(pool: &PgPool, filter: &ProductFilter) -> Result<i64, sqlx::Error> {
    let query_span = tracing::info_span!("Count products.", filters = filter.predicates().len());

    let mut query = filter.count_query();
    let total = query
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products, error: {:?}", err);
            err
        })?;

    Ok(total)
}

/// One id-ordered page of the products matching `filter`, with the total
/// count of matches. An empty filter lists everything.
///
/// The count and the page are two statements; a write landing between them
/// can leave `total` briefly out of step with the page.
pub async fn list(
    pool: &PgPool,
    filter: &ProductFilter,
    limit: i64,
    offset: i64,
) -> Result<(Vec<models::Product>, i64), sqlx::Error> {
    let total = count(pool, filter).await?;

    let query_span = tracing::info_span!("Fetch product page.", limit, offset);
    let mut query = filter.page_query(limit, offset);
    let products = query
        .build_query_as::<models::Product>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            err
        })?;

    Ok((products, total))
}

pub async fn insert(
    pool: &PgPool,
    mut product: models::Product,
) -> Result<models::Product, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, (i32, DateTime<Utc>, DateTime<Utc>)>(
        r#"
        INSERT INTO product (
            name, description, defect, type, waist, length, chest,
            owner, status, price, saleprice, image, createdate, updatedate
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())
        RETURNING id, createdate, updatedate
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.defect)
    .bind(&product.kind)
    .bind(product.waist)
    .bind(product.length)
    .bind(product.chest)
    .bind(product.owner)
    .bind(&product.status)
    .bind(product.price)
    .bind(product.sale_price)
    .bind(&product.image)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |(id, created_at, updated_at)| {
        product.id = id;
        product.created_at = created_at;
        product.updated_at = updated_at;
        product
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

/// Replaces every mutable column of product `id` and returns the stored row,
/// owner name included, from the same statement. `None` when no row has that id.
pub async fn update(
    pool: &PgPool,
    id: i32,
    product: models::Product,
) -> Result<Option<models::Product>, sqlx::Error> {
    let query_span = tracing::info_span!("Updating product", id);
    sqlx::query_as::<_, models::Product>(
        r#"
        WITH updated AS (
            UPDATE product
            SET
                name = $1,
                description = $2,
                defect = $3,
                type = $4,
                waist = $5,
                length = $6,
                chest = $7,
                owner = $8,
                status = $9,
                price = $10,
                saleprice = $11,
                image = $12,
                updatedate = NOW()
            WHERE id = $13
            RETURNING *
        )
        SELECT
            u.id, u.name, u.description, u.defect, u.type, u.waist, u.length, u.chest, u.owner,
            u.status, u.price, u.saleprice, u.image, u.createdate, u.updatedate,
            o.name AS ownername
        FROM updated u
        JOIN owner o ON u.owner = o.id
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.defect)
    .bind(&product.kind)
    .bind(product.waist)
    .bind(product.length)
    .bind(product.chest)
    .bind(product.owner)
    .bind(&product.status)
    .bind(product.price)
    .bind(product.sale_price)
    .bind(&product.image)
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        if result.is_some() {
            tracing::info!("Product {} has been updated", id);
        }
        result
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

/// `false` when no row was deleted.
#[tracing::instrument(name = "Delete product.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM product WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            err
        })
}
