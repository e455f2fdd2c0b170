//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with a per-client cookie store, so each TestServer behaves like one
//! browser session.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use reanvue_api::{create_app, create_app_state};
use reanvue_common::AppConfig;
use reqwest::{Client, Response};
use serde::Serialize;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check whether the test environment (PostgreSQL + Redis) is configured.
///
/// Tests call this first and return early when the environment is absent,
/// so the suite passes on machines without the backing services.
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();

    if std::env::var("DATABASE_URL").is_err() || std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping integration test: DATABASE_URL / REDIS_URL not set");
        return false;
    }

    true
}

/// Load test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    Ok(AppConfig::from_env()?)
}

/// Connect a plain pool for test fixtures (role changes, row checks)
pub async fn test_pool() -> Result<PgPool> {
    let url = std::env::var("DATABASE_URL")?;
    Ok(PgPool::connect(&url).await?)
}

/// Apply the workspace migrations (idempotent)
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(dir).await?;
    migrator.run(pool).await?;
    Ok(())
}

/// Promote or demote a user directly in the store; role assignment has no
/// API surface, so tests reach underneath.
pub async fn set_role(pool: &PgPool, user_id: &str, role: &str) -> Result<()> {
    let id: uuid::Uuid = user_id.parse()?;
    sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
        .bind(id)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(())
}

/// Count user rows with the given username
pub async fn count_users_named(pool: &PgPool, username: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with a fresh cookie-holding client
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let pool = test_pool().await?;
        run_migrations(&pool).await?;

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Cookie store on: the client carries reanvue.qid like a browser
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// A second, independent client against the same server (another "browser")
    pub fn new_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?)
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}
