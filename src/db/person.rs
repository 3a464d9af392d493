use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Person>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch all users.");
    sqlx::query_as::<_, models::Person>("SELECT id, firstname, lastname FROM users ORDER BY id")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch users, error: {:?}", err);
            err
        })
}

pub async fn insert(pool: &PgPool, mut person: models::Person) -> Result<models::Person, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (firstname, lastname) VALUES ($1, $2) RETURNING id",
    )
    .bind(&person.firstname)
    .bind(&person.lastname)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(move |id| {
        person.id = id;
        person
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}
