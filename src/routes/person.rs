use crate::db;
use crate::forms;
use crate::helpers::ApiError;
use crate::models;
use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::PgPool;

#[tracing::instrument(name = "Add user.", skip(pg_pool))]
#[post("/user")]
pub async fn add(
    form: web::Json<forms::PersonForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder, ApiError> {
    let person: models::Person = form.into_inner().into();

    db::person::insert(pg_pool.get_ref(), person)
        .await
        .map(|person| {
            tracing::info!("User {} created", person.id);
            HttpResponse::Ok().body("Create User Successfully.")
        })
        .map_err(ApiError::rejected("Failed to create user"))
}

#[tracing::instrument(name = "Get all users.", skip(pg_pool))]
#[get("/users")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder, ApiError> {
    db::person::fetch_all(pg_pool.get_ref())
        .await
        .map(web::Json)
        .map_err(ApiError::rejected("Failed to get users"))
}
