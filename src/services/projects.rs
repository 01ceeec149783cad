//! Project domain service.
//!
//! Every operation takes the caller's user id and enforces ownership at the
//! query level: a project that exists but belongs to someone else is reported
//! exactly like a project that does not exist.

use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::{
        projects::{NewProject, Project, UpdateProject},
        requests::{CreateProjectRequest, UpdateProjectRequest},
    },
    queries::{projects, tasks},
    validation,
};

/// Lists the caller's projects, most recently updated first.
pub async fn list_projects(conn: &mut DbConn, user_id: Uuid) -> Result<Vec<Project>> {
    projects::list_projects_by_owner(conn, user_id).await
}

/// Creates a project owned by the caller.
///
/// The title is required and trimmed; a description that is empty after
/// trimming is stored as absent, not as an empty string.
pub async fn create_project(
    conn: &mut DbConn,
    user_id: Uuid,
    request: CreateProjectRequest,
) -> Result<Project> {
    let title = validation::validate_required_string(&request.title, "Project title")?;
    let description = validation::normalize_optional_string(request.description);

    let new_project = NewProject {
        title,
        description,
        user_id,
    };
    let project = projects::create_project(conn, new_project).await?;

    tracing::debug!(project_id = %project.id, "project created");

    Ok(project)
}

/// Gets a single project owned by the caller.
pub async fn get_project(conn: &mut DbConn, user_id: Uuid, project_id: Uuid) -> Result<Project> {
    projects::get_project_owned(conn, project_id, user_id)
        .await?
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))
}

/// Overwrites a project's title and description.
///
/// This is a full overwrite: an omitted description unsets the stored one.
/// Task updates merge instead; the asymmetry is intentional, see DESIGN.md.
pub async fn update_project(
    conn: &mut DbConn,
    user_id: Uuid,
    project_id: Uuid,
    request: UpdateProjectRequest,
) -> Result<Project> {
    let title = validation::validate_required_string(&request.title, "Project title")?;
    let description = validation::normalize_optional_string(request.description);

    projects::update_project(conn, project_id, user_id, UpdateProject { title, description })
        .await?
        .ok_or_else(|| Error::NotFound("Project not found".to_string()))
}

/// Deletes a project and every task that belongs to it.
///
/// The project row is removed first, then its tasks. The two statements are
/// not atomic: a crash in between leaves orphan tasks, an accepted risk at
/// this scale. A second delete of the same id fails with NotFound.
pub async fn delete_project(conn: &mut DbConn, user_id: Uuid, project_id: Uuid) -> Result<()> {
    let rows_affected = projects::delete_project(conn, project_id, user_id).await?;

    if rows_affected == 0 {
        return Err(Error::NotFound("Project not found".to_string()));
    }

    let tasks_removed = tasks::delete_tasks_by_project(conn, project_id).await?;

    tracing::debug!(
        project_id = %project_id,
        tasks_removed,
        "project deleted"
    );

    Ok(())
}
