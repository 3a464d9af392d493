use crate::forms;
use crate::helpers::{ApiError, JwtManager, TokenResponse};
use crate::services;
use actix_web::{post, web, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Login.", skip(pg_pool, jwt))]
#[post("/login")]
pub async fn handler(
    form: web::Json<forms::Login>,
    pg_pool: web::Data<PgPool>,
    jwt: web::Data<JwtManager>,
) -> Result<impl Responder, ApiError> {
    services::auth::authenticate(pg_pool.get_ref(), jwt.get_ref(), &form)
        .await
        .map(|token| web::Json(TokenResponse { token }))
}
