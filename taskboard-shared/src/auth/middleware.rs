/// Bearer-token authentication middleware for Axum
///
/// Extracts the `Authorization: Bearer <token>` header, validates the token,
/// and attaches an [`AuthContext`] to the request extensions for downstream
/// handlers. A missing header and a header that does not parse as a Bearer
/// credential are treated identically: the caller never presented a usable
/// credential. A credential that parses but fails verification is a distinct
/// failure with its own status code.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::get, Extension, Router};
/// use taskboard_shared::auth::middleware::{jwt_auth_middleware, AuthContext};
///
/// async fn protected(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, user {}!", auth.user_id)
/// }
///
/// let secret = "your-secret-key-at-least-32-bytes".to_string();
/// let app: Router = Router::new()
///     .route("/protected", get(protected))
///     .layer(middleware::from_fn(move |req, next| {
///         jwt_auth_middleware(secret.clone(), req, next)
///     }));
/// ```

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::jwt::{validate_token, JwtError};

/// Authentication context added to request extensions after a token passes
/// verification
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID (the token's subject)
    pub user_id: i64,
}

/// Error type for the authentication middleware
#[derive(Debug)]
pub enum AuthError {
    /// No credential: the Authorization header is absent, is not a Bearer
    /// credential, or has an empty token segment
    MissingCredentials,

    /// The credential was presented but failed verification (bad signature,
    /// expired, malformed payload)
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                "Missing or malformed bearer token".to_string(),
            ),
            AuthError::InvalidToken(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Extracts the bearer token from a request's Authorization header
///
/// Fails with [`AuthError::MissingCredentials`] when the header is absent,
/// not valid UTF-8, lacks the `Bearer ` scheme prefix, or carries an empty
/// token segment.
pub fn bearer_token(req: &Request) -> Result<&str, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredentials)?;

    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    Ok(token)
}

/// JWT authentication middleware
///
/// Validates the bearer token against `secret` and inserts an
/// [`AuthContext`] into the request extensions on success.
///
/// # Errors
///
/// - [`AuthError::MissingCredentials`] when no usable credential is present
/// - [`AuthError::InvalidToken`] when the token fails verification
pub async fn jwt_auth_middleware(
    secret: String,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(&req)?;

    let claims = validate_token(token, &secret).map_err(|e| match e {
        JwtError::Expired => AuthError::InvalidToken("Token expired".to_string()),
        JwtError::InvalidIssuer => AuthError::InvalidToken("Invalid issuer".to_string()),
        _ => AuthError::InvalidToken("Invalid token".to_string()),
    })?;

    req.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
    });

    Ok(next.run(req).await)
}
