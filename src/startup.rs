use crate::configuration::Settings;
use crate::helpers::{ApiError, JwtManager};
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let jwt = web::Data::new(JwtManager::new(&settings.auth.jwt_secret));
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .configure(configure)
            .app_data(pg_pool.clone())
            .app_data(jwt.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Routes and extractor settings. Malformed bodies, ids and queries all answer 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|_err, _req| ApiError::Validation("Invalid ID".to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

    cfg.app_data(json_config)
        .app_data(path_config)
        .app_data(query_config)
        .service(web::scope("/health_check").service(routes::health_check))
        .service(routes::login::handler)
        .service(
            web::scope("/product")
                .wrap(middleware::authorization::Gate::catalog_policy())
                .service(routes::product::get::filter)
                .service(routes::product::get::list)
                .service(routes::product::get::item)
                .service(routes::product::add::item)
                .service(routes::product::update::bulk)
                .service(routes::product::update::item)
                .service(routes::product::delete::item),
        )
        .service(
            web::scope("/owner")
                .service(routes::owner::get::list)
                .service(routes::owner::get::item)
                .service(routes::owner::add::item)
                .service(routes::owner::update::item),
        )
        .service(routes::lookup::types)
        .service(routes::lookup::statuses)
        .service(routes::person::add)
        .service(routes::person::list);
}
