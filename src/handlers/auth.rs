//! Authentication handlers.
//!
//! Handlers follow the thin-layer pattern: they validate inputs, delegate to
//! services, and wrap responses. All business logic is in the service layer.

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::{
        requests::{LoginRequest, RegisterRequest},
        users::PublicUser,
    },
    queries,
    services::{jwt, users},
    state::AppState,
};

/// POST /auth/register
///
/// Registers a new user and returns the user together with a signed token,
/// so registration doubles as login.
///
/// # HTTP Status Codes
/// - `200 OK`: User registered successfully
/// - `400 BAD_REQUEST`: Missing fields, password too short, or email taken
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let user = users::register_user(&mut conn, request).await?;

    let token = jwt::generate_jwt(
        user.id,
        &user.email,
        state.config.jwt.secret_str(),
        state.config.jwt.expiration_minutes,
    )?;

    Ok(Json(serde_json::json!({
        "user": PublicUser::from(&user),
        "token": token,
    })))
}

/// POST /auth/login
///
/// Authenticates a user with email and password and returns a signed token.
///
/// # HTTP Status Codes
/// - `200 OK`: Authentication successful
/// - `400 BAD_REQUEST`: Missing email or password
/// - `401 UNAUTHORIZED`: Invalid email or password
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let user = users::login_user(&mut conn, request).await?;

    let token = jwt::generate_jwt(
        user.id,
        &user.email,
        state.config.jwt.secret_str(),
        state.config.jwt.expiration_minutes,
    )?;

    Ok(Json(serde_json::json!({
        "user": PublicUser::from(&user),
        "token": token,
    })))
}

/// POST /auth/logout
///
/// Tokens are not revoked server-side; the client discards its copy. The
/// endpoint exists so clients have a uniform call to make.
pub async fn logout() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Logged out successfully",
    }))
}

/// GET /auth/me
///
/// Returns the authenticated user's identity, re-read from storage.
///
/// # HTTP Status Codes
/// - `200 OK`: User found
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: The user row no longer exists
pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let user = queries::users::get_user_by_id(&mut conn, auth_user.id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "user": PublicUser::from(&user),
    })))
}
