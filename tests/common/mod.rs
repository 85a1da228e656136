use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use formdrop::config::Config;

/// A running test server instance backed by an in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit JSON data under a discriminator, return (body, status).
    pub async fn submit(&self, kind: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/api/submit/{kind}")))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw request body (possibly invalid JSON), return (body, status).
    pub async fn submit_raw(&self, kind: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/api/submit/{kind}")))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Fetch stored submissions, optionally filtered by discriminator.
    pub async fn list(&self, kind: Option<&str>) -> (Value, StatusCode) {
        let url = match kind {
            Some(kind) => self.url(&format!("/api/submissions?type={kind}")),
            None => self.url("/api/submissions"),
        };
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .expect("list request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub async fn spawn_app() -> TestApp {
    // One connection so every request sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        static_dir: "dist".to_string(),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = formdrop::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp { addr, pool, client }
}
