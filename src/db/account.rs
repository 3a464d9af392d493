use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// Looks up an account by exact email and password.
///
/// Passwords are stored and compared as plain text.
pub async fn fetch_by_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<models::Account>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch account by credentials.", email = %email);
    sqlx::query_as::<_, models::Account>(
        r#"
        SELECT
            id, email, password, firstname, lastname,
            phone, address, role, country, zipcode
        FROM public."user"
        WHERE email = $1 AND password = $2
        LIMIT 1
        "#,
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch account, error: {:?}", err);
        err
    })
}
