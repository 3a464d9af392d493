use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_types(pool: &PgPool) -> Result<Vec<models::Type>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch product types.");
    sqlx::query_as::<_, models::Type>("SELECT id, name FROM type ORDER BY id")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch types, error: {:?}", err);
            err
        })
}

pub async fn fetch_statuses(pool: &PgPool) -> Result<Vec<models::Status>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch product statuses.");
    sqlx::query_as::<_, models::Status>("SELECT id, name FROM status ORDER BY id")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch statuses, error: {:?}", err);
            err
        })
}
