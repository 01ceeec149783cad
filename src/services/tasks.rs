//! Task domain service.
//!
//! A task is only reachable through a project owned by the caller. Every
//! operation here resolves that chain before touching the task, via
//! [`authorize_task_access`] for task-id operations or the parent project
//! lookup for project-scoped ones. A task whose parent project belongs to
//! another user is reported exactly like a task that does not exist.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::{
        projects::Project,
        requests::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest},
        tasks::{NewTask, SortOrder, Task, TaskSortKey, TaskStatus, UpdateTask},
    },
    queries::{projects, tasks},
    validation,
};

/// Resolves a task together with its parent project, checking the project's
/// owner against the caller.
///
/// This is the single ownership gate for all task-id operations; tasks carry
/// no user field of their own. Both a missing task and a foreign parent
/// project produce the same NotFound.
pub async fn authorize_task_access(
    conn: &mut DbConn,
    user_id: Uuid,
    task_id: Uuid,
) -> Result<(Task, Project)> {
    let task = tasks::get_task_by_id(conn, task_id)
        .await?
        .ok_or_else(|| Error::NotFound("Task not found".to_string()))?;

    let project = projects::get_project_owned(conn, task.project_id, user_id)
        .await?
        .ok_or_else(|| Error::NotFound("Task not found".to_string()))?;

    Ok((task, project))
}

/// Lists the tasks of a project owned by the caller.
///
/// An unrecognized status filter is ignored rather than rejected, and an
/// unrecognized sort key falls back to creation order.
pub async fn list_tasks(
    conn: &mut DbConn,
    user_id: Uuid,
    project_id: Uuid,
    query: ListTasksQuery,
) -> Result<Vec<Task>> {
    projects::get_project_owned(conn, project_id, user_id)
        .await?
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))?;

    let status = query
        .status
        .as_deref()
        .and_then(|s| TaskStatus::from_str(s).ok());
    let sort_by = TaskSortKey::parse(query.sort_by.as_deref());
    let order = SortOrder::parse(query.order.as_deref());

    tasks::list_tasks(conn, project_id, status, sort_by, order).await
}

/// Creates a task in a project owned by the caller.
pub async fn create_task(
    conn: &mut DbConn,
    user_id: Uuid,
    project_id: Uuid,
    request: CreateTaskRequest,
) -> Result<Task> {
    projects::get_project_owned(conn, project_id, user_id)
        .await?
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))?;

    let title = validation::validate_required_string(&request.title, "Task title")?;
    let description = validation::normalize_optional_string(request.description);
    let status = parse_status(request.status)?.unwrap_or_default();
    let due_date = match validation::normalize_optional_string(request.due_date) {
        Some(raw) => Some(parse_due_date(&raw)?),
        None => None,
    };

    let new_task = NewTask {
        title,
        description,
        status,
        due_date,
        project_id,
    };
    let task = tasks::create_task(conn, new_task).await?;

    tracing::debug!(task_id = %task.id, project_id = %project_id, "task created");

    Ok(task)
}

/// Gets a single task reachable through a project owned by the caller.
pub async fn get_task(conn: &mut DbConn, user_id: Uuid, task_id: Uuid) -> Result<Task> {
    let (task, _project) = authorize_task_access(conn, user_id, task_id).await?;
    Ok(task)
}

/// Applies a partial update to a task.
///
/// Provided fields overwrite, omitted fields keep their stored values.
/// Project updates overwrite instead; the asymmetry is intentional, see
/// DESIGN.md.
pub async fn update_task(
    conn: &mut DbConn,
    user_id: Uuid,
    task_id: Uuid,
    request: UpdateTaskRequest,
) -> Result<Task> {
    let (task, _project) = authorize_task_access(conn, user_id, task_id).await?;

    let title = match request.title {
        Some(raw) => Some(validation::validate_required_string(&raw, "Task title")?),
        None => None,
    };
    let description = validation::normalize_optional_string(request.description);
    let status = parse_status(request.status)?;
    let due_date = match validation::normalize_optional_string(request.due_date) {
        Some(raw) => Some(parse_due_date(&raw)?),
        None => None,
    };

    let update = UpdateTask {
        title,
        description,
        status,
        due_date,
    };

    tasks::update_task(conn, task.id, update).await
}

/// Deletes a task reachable through a project owned by the caller.
/// A second delete of the same id fails with NotFound.
pub async fn delete_task(conn: &mut DbConn, user_id: Uuid, task_id: Uuid) -> Result<()> {
    let (task, _project) = authorize_task_access(conn, user_id, task_id).await?;

    let rows_affected = tasks::delete_task(conn, task.id).await?;
    if rows_affected == 0 {
        return Err(Error::NotFound("Task not found".to_string()));
    }

    tracing::debug!(task_id = %task_id, "task deleted");

    Ok(())
}

/// Parses an optional status string. Empty input counts as absent; anything
/// outside the three known states is a validation error.
fn parse_status(input: Option<String>) -> Result<Option<TaskStatus>> {
    match validation::normalize_optional_string(input) {
        Some(raw) => TaskStatus::from_str(&raw)
            .map(Some)
            .map_err(|_| Error::Validation(format!("Invalid task status: {}", raw))),
        None => Ok(None),
    }
}

/// Parses a due date from RFC 3339 or a bare `YYYY-MM-DD` date (taken as
/// midnight UTC).
fn parse_due_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(Error::Validation(format!("Invalid due date: {}", raw)))
}
