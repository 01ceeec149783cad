use chrono::Utc;
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::projects::{NewProject, Project, UpdateProject},
};

/// Creates a new project in the database.
pub async fn create_project(conn: &mut DbConn, new_project: NewProject) -> Result<Project> {
    let now = Utc::now();
    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, title, description, user_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, user_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&new_project.title)
    .bind(&new_project.description)
    .bind(new_project.user_id)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(project)
}

/// Gets a single project by ID, filtered by owner. A miss means the project
/// does not exist OR belongs to a different user; callers cannot tell which.
pub async fn get_project_owned(
    conn: &mut DbConn,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<Project>> {
    let project = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, user_id, created_at, updated_at
        FROM projects
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(project)
}

/// Lists all projects owned by a user, most recently updated first.
pub async fn list_projects_by_owner(conn: &mut DbConn, user_id: Uuid) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, user_id, created_at, updated_at
        FROM projects
        WHERE user_id = ?
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(projects)
}

/// Overwrites a project's title and description, filtered by owner.
/// Returns `None` when the project is missing or owned by someone else.
pub async fn update_project(
    conn: &mut DbConn,
    id: Uuid,
    user_id: Uuid,
    update: UpdateProject,
) -> Result<Option<Project>> {
    let project = sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET title = ?, description = ?, updated_at = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, title, description, user_id, created_at, updated_at
        "#,
    )
    .bind(&update.title)
    .bind(&update.description)
    .bind(Utc::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(project)
}

/// Deletes a project by ID, filtered by owner. Returns the number of rows
/// removed (0 when missing or not owned).
pub async fn delete_project(conn: &mut DbConn, id: Uuid, user_id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM projects
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}
