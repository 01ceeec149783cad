//! Bearer-token authentication middleware.
//!
//! Validates the JWT from the Authorization header and adds the identity it
//! carries to request extensions. Stateless per request: no session storage
//! and no database lookup here.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::Result, services::jwt::authenticate_bearer, state::AppState};

/// Authenticated user extracted from the bearer token
///
/// This struct is added to request extensions by the auth middleware
/// after successful validation.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// User's unique identifier
    pub id: Uuid,
    /// User's email address
    pub email: String,
}

/// Bearer-token authentication middleware
///
/// # Behavior
/// 1. Reads the `Authorization: Bearer <token>` header
/// 2. Validates the JWT signature and expiration
/// 3. Adds `AuthenticatedUser` to request extensions for handler access
/// 4. Returns 401 if the header is missing/malformed or the token is invalid
///    or expired — the cases are indistinguishable to the caller
///
/// # Usage
/// Apply this middleware to protected routes using `route_layer()`:
///
/// ```ignore
/// Router::new()
///     .route("/projects", get(list_projects))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         auth_middleware,
///     ))
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

    let (user_id, email) = authenticate_bearer(auth_header, state.config.jwt.secret_str())?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { id: user_id, email });

    Ok(next.run(request).await)
}
