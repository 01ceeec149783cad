//! Project CRUD handlers.
//!
//! Handlers follow the thin-layer pattern: they validate the path id, acquire
//! a connection, delegate to the project service, and wrap the response. The
//! ownership rules live in the service layer.

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::requests::{CreateProjectRequest, UpdateProjectRequest},
    services::projects,
    state::AppState,
    validation,
};

/// GET /projects
///
/// Lists the authenticated user's projects, most recently updated first.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `401 UNAUTHORIZED`: Missing or invalid token
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let projects = projects::list_projects(&mut conn, auth_user.id).await?;

    Ok(Json(serde_json::json!({
        "projects": projects,
    })))
}

/// POST /projects
///
/// Creates a project owned by the authenticated user.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Empty title
/// - `401 UNAUTHORIZED`: Missing or invalid token
pub async fn create_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<Json<serde_json::Value>> {
    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let project = projects::create_project(&mut conn, auth_user.id, request).await?;

    Ok(Json(serde_json::json!({
        "project": project,
    })))
}

/// GET /projects/{id}
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Project missing or owned by another user
pub async fn get_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let project_id = validation::validate_uuid(&id, "project id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let project = projects::get_project(&mut conn, auth_user.id, project_id).await?;

    Ok(Json(serde_json::json!({
        "project": project,
    })))
}

/// PUT /projects/{id}
///
/// Overwrites the project's title and description.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id or empty title
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Project missing or owned by another user
pub async fn update_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<serde_json::Value>> {
    let project_id = validation::validate_uuid(&id, "project id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let project = projects::update_project(&mut conn, auth_user.id, project_id, request).await?;

    Ok(Json(serde_json::json!({
        "project": project,
    })))
}

/// DELETE /projects/{id}
///
/// Deletes the project and all of its tasks.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Project missing or owned by another user
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let project_id = validation::validate_uuid(&id, "project id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    projects::delete_project(&mut conn, auth_user.id, project_id).await?;

    Ok(Json(serde_json::json!({
        "message": "Project deleted successfully",
    })))
}
