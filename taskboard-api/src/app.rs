/// Application state and router builder
///
/// Defines the shared application state and builds the Axum router with all
/// routes and middleware. Whether the task routes sit behind the bearer
/// token middleware is decided here from configuration, in one visible
/// place; the root and health routes are always public.
///
/// # Example
///
/// ```no_run
/// use taskboard_api::{app::{build_router, AppState}, config::Config};
/// use taskboard_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.database.clone()).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError, routes};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use taskboard_shared::auth::middleware::jwt_auth_middleware;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The config
/// sits behind an `Arc` so clones stay cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token verification
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router
///
/// # Routes
///
/// ```text
/// /
/// ├── GET    /              # Welcome message (public)
/// ├── GET    /health        # Health check (public)
/// └── /tasks                # Protected iff PROTECT_TASK_ROUTES=true
///     ├── POST   /          # Create task
///     ├── GET    /          # List tasks
///     ├── GET    /:id       # Fetch one task
///     ├── PUT    /:id       # Replace a task's fields
///     └── DELETE /:id       # Delete task
/// ```
pub fn build_router(state: AppState) -> Router {
    let mut task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:id",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        );

    if state.config.auth.protect_task_routes {
        task_routes = task_routes.layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));
    }

    Router::new()
        .route("/", get(routes::root::welcome))
        .route("/health", get(routes::health::health_check))
        .nest("/tasks", task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Bearer token middleware layer
///
/// Delegates to the shared JWT middleware with the configured secret and
/// converts its failures into the API error shape.
async fn jwt_auth_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    jwt_auth_middleware(state.jwt_secret().to_string(), req, next)
        .await
        .map_err(ApiError::from)
}
