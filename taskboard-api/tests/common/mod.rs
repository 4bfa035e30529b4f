/// Common test utilities for integration tests
///
/// Provides a `TestContext` that wires the real router to a private
/// in-memory SQLite database with migrations applied, one provisioned user,
/// and a valid token for that user. Requests are driven straight through
/// the router with `tower::ServiceExt::oneshot`, no listening socket
/// involved.

use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, AuthConfig, Config, JwtConfig};
use taskboard_shared::auth::jwt::{create_token, Claims};
use taskboard_shared::db::migrations::run_migrations;
use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
use taskboard_shared::models::user::{CreateUser, User};
use tower::ServiceExt;

/// Signing secret used by every integration test
pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test context containing the app and its backing resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
    pub user: User,
    pub jwt_token: String,
}

impl TestContext {
    /// Creates a context with the default policy (task routes open)
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_protection(false).await
    }

    /// Creates a context with an explicit route-protection policy
    pub async fn with_protection(protect_task_routes: bool) -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                connect_timeout_seconds: 5,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
            auth: AuthConfig {
                protect_task_routes,
            },
            seed_demo_data: false,
        };

        let db = create_pool(config.database.clone()).await?;
        run_migrations(&db).await?;

        let user = User::create(
            &db,
            CreateUser {
                username: "john_doe".to_string(),
                password_hash: "password1".to_string(),
            },
        )
        .await?;

        let claims = Claims::new(user.id);
        let jwt_token = create_token(&claims, TEST_JWT_SECRET)?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(Self {
            db,
            app,
            user,
            jwt_token,
        })
    }

    /// Returns the authorization header value for the provisioned user
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Sends a request and returns the status plus raw body bytes
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Bytes) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, bytes)
    }

    /// Sends a request and parses the response body as JSON
    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        auth: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, auth, body).await;
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| panic!("Expected JSON body, got {:?}", bytes));
        (status, value)
    }
}
