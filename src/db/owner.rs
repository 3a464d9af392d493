use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Owner>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch all owners.");
    sqlx::query_as::<_, models::Owner>("SELECT id, name FROM owner ORDER BY id")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch owners, error: {:?}", err);
            err
        })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Owner>, sqlx::Error> {
    tracing::info!("Fetch owner {}", id);
    sqlx::query_as::<_, models::Owner>("SELECT id, name FROM owner WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch owner, error: {:?}", err);
            err
        })
}

pub async fn insert(pool: &PgPool, mut owner: models::Owner) -> Result<models::Owner, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new owner into the database");
    sqlx::query_scalar::<_, i32>("INSERT INTO owner (name) VALUES ($1) RETURNING id")
        .bind(&owner.name)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(move |id| {
            owner.id = id;
            owner
        })
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            err
        })
}

/// Renames owner `id`. `None` when no row has that id.
pub async fn update(
    pool: &PgPool,
    id: i32,
    owner: models::Owner,
) -> Result<Option<models::Owner>, sqlx::Error> {
    let query_span = tracing::info_span!("Updating owner", id);
    sqlx::query_as::<_, models::Owner>(
        "UPDATE owner SET name = $1 WHERE id = $2 RETURNING id, name",
    )
    .bind(&owner.name)
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}
