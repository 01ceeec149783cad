use std::str::FromStr;

use reqwest::Client;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use taskboard::{AppState, Config, database, router};
use tokio::net::TcpListener;

/// HTTP test application wrapper
///
/// Manages an Axum server running on a random port for HTTP testing.
/// Each test gets its own server instance and its own in-memory database,
/// so tests run in parallel without sharing state.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client for making requests
    pub client: Client,
}

impl TestApp {
    /// Create a new HTTP test app with server on random port
    ///
    /// # How it works:
    /// 1. Creates an in-memory SQLite database and runs migrations
    /// 2. Builds the real application router
    /// 3. Binds to port 0 (OS assigns random available port)
    /// 4. Starts the server in a background task
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("Failed to parse database options");

        // A single long-lived connection: in-memory SQLite databases live
        // and die with their connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool, Config::default());
        let app = router(state);

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        // Start server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give server time to start
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { address, client }
    }

    /// Get the full URL for an API endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Registers a user and returns the issued token
    #[allow(dead_code)]
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200, "registration should succeed");

        let body: serde_json::Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    /// Creates a project and returns its JSON representation
    #[allow(dead_code)]
    pub async fn create_project(&self, token: &str, title: &str) -> serde_json::Value {
        let response = self
            .client
            .post(self.url("/projects"))
            .bearer_auth(token)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200, "project creation should succeed");

        let body: serde_json::Value = response.json().await.unwrap();
        body["project"].clone()
    }

    /// Creates a task from an arbitrary request body and returns its JSON
    /// representation
    #[allow(dead_code)]
    pub async fn create_task(
        &self,
        token: &str,
        project_id: &str,
        body: serde_json::Value,
    ) -> serde_json::Value {
        let response = self
            .client
            .post(self.url(&format!("/projects/{}/tasks", project_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200, "task creation should succeed");

        let body: serde_json::Value = response.json().await.unwrap();
        body["task"].clone()
    }
}
