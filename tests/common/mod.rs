#![allow(dead_code)]

use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use wearlab::configuration::{get_configuration, DatabaseSettings, Settings};

pub const JWT_SECRET: &str = "integration-secret";
pub const EMAIL: &str = "shop@wearlab.test";
pub const PASSWORD: &str = "wearlab30102001";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub settings: Settings,
}

/// Starts the server on a random port against a fresh database.
/// `None` when PostgreSQL is not reachable, so callers can skip.
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    configuration.auth.jwt_secret = JWT_SECRET.to_string();

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = wearlab::startup::run(listener, connection_pool.clone(), configuration.clone())
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        settings: configuration,
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn seed_account(&self, email: &str, password: &str) {
        sqlx::query(r#"INSERT INTO public."user" (email, password) VALUES ($1, $2)"#)
            .bind(email)
            .bind(password)
            .execute(&self.db_pool)
            .await
            .expect("Failed to seed account");
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(self.url("/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Seeds the default account and returns a token for it.
    pub async fn token(&self) -> String {
        self.seed_account(EMAIL, PASSWORD).await;
        let body: serde_json::Value = self
            .login(EMAIL, PASSWORD)
            .await
            .json()
            .await
            .expect("Failed to read login response");

        body["token"].as_str().expect("token missing").to_string()
    }

    pub async fn create_owner(&self, name: &str) -> i32 {
        let response = reqwest::Client::new()
            .post(self.url("/owner"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert!(response.status().is_success());

        sqlx::query_scalar::<_, i32>("SELECT id FROM owner WHERE name = $1 ORDER BY id DESC LIMIT 1")
            .bind(name)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to fetch owner id")
    }

    /// Creates a product through the API and returns its id.
    pub async fn create_product(&self, token: &str, product: serde_json::Value) -> i32 {
        let response = reqwest::Client::new()
            .post(self.url("/product"))
            .bearer_auth(token)
            .json(&product)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 200);

        sqlx::query_scalar::<_, i32>("SELECT MAX(id) FROM product")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to fetch product id")
    }
}
