use crate::db;
use crate::forms;
use crate::helpers::{ApiError, JwtManager};
use serde_valid::Validate;
use sqlx::PgPool;

/// Message for every failed login, so callers cannot tell an unknown email
/// from a wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Checks the credentials and issues a 72h token carrying the account email.
/// Blank credentials are refused without touching the store.
#[tracing::instrument(name = "Authenticate account.", skip(pool, jwt))]
pub async fn authenticate(
    pool: &PgPool,
    jwt: &JwtManager,
    login: &forms::Login,
) -> Result<String, ApiError> {
    if let Err(errors) = login.validate() {
        tracing::debug!("Login rejected: {}", errors);
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let account = db::account::fetch_by_credentials(pool, &login.email, &login.password)
        .await
        .map_err(ApiError::storage("Failed to authenticate"))?
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let token = jwt.issue(&account.email)?;
    tracing::info!("Account {} logged in", account.id);

    Ok(token)
}
