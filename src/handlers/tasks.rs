//! Task CRUD handlers.
//!
//! Task routes come in two shapes: project-scoped (`/projects/{id}/tasks`)
//! and task-id (`/tasks/{id}`). Both funnel through the task service, which
//! always resolves ownership via the parent project.

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};

use crate::{
    error::{Error, Result},
    middleware::auth::AuthenticatedUser,
    models::requests::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest},
    services::tasks,
    state::AppState,
    validation,
};

/// GET /projects/{id}/tasks
///
/// Lists the tasks of a project owned by the authenticated user. Supports
/// `status`, `sortBy`, and `order` query parameters; unrecognized values are
/// tolerated rather than rejected.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed project id
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Project missing or owned by another user
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<serde_json::Value>> {
    let project_id = validation::validate_uuid(&id, "project id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let tasks = tasks::list_tasks(&mut conn, auth_user.id, project_id, query).await?;

    Ok(Json(serde_json::json!({
        "tasks": tasks,
    })))
}

/// POST /projects/{id}/tasks
///
/// Creates a task in a project owned by the authenticated user.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id, empty title, bad status, or bad due date
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Project missing or owned by another user
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<serde_json::Value>> {
    let project_id = validation::validate_uuid(&id, "project id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let task = tasks::create_task(&mut conn, auth_user.id, project_id, request).await?;

    Ok(Json(serde_json::json!({
        "task": task,
    })))
}

/// GET /tasks/{id}
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Task missing or its project owned by another user
pub async fn get_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let task_id = validation::validate_uuid(&id, "task id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let task = tasks::get_task(&mut conn, auth_user.id, task_id).await?;

    Ok(Json(serde_json::json!({
        "task": task,
    })))
}

/// PUT /tasks/{id}
///
/// Partially updates a task: provided fields overwrite, omitted fields keep
/// their stored values.
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id, empty title, bad status, or bad due date
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Task missing or its project owned by another user
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<serde_json::Value>> {
    let task_id = validation::validate_uuid(&id, "task id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    let task = tasks::update_task(&mut conn, auth_user.id, task_id, request).await?;

    Ok(Json(serde_json::json!({
        "task": task,
    })))
}

/// DELETE /tasks/{id}
///
/// # HTTP Status Codes
/// - `200 OK`
/// - `400 BAD_REQUEST`: Malformed id
/// - `401 UNAUTHORIZED`: Missing or invalid token
/// - `404 NOT_FOUND`: Task missing or its project owned by another user
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let task_id = validation::validate_uuid(&id, "task id")?;

    let mut conn = state.pool.acquire().await.map_err(|e| {
        Error::Internal(format!("Failed to acquire database connection: {}", e))
    })?;

    tasks::delete_task(&mut conn, auth_user.id, task_id).await?;

    Ok(Json(serde_json::json!({
        "message": "Task deleted successfully",
    })))
}
