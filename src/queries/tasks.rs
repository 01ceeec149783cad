use chrono::Utc;
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::tasks::{NewTask, SortOrder, Task, TaskSortKey, TaskStatus, UpdateTask},
};

const TASK_COLUMNS: &str = "id, title, description, status, due_date, project_id, created_at, updated_at";

/// Creates a new task in the database.
pub async fn create_task(conn: &mut DbConn, new_task: NewTask) -> Result<Task> {
    let now = Utc::now();
    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, title, description, status, due_date, project_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, status, due_date, project_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&new_task.title)
    .bind(&new_task.description)
    .bind(new_task.status)
    .bind(new_task.due_date)
    .bind(new_task.project_id)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(task)
}

/// Gets a single task by its ID. The task may not exist. Ownership is NOT
/// checked here; the service layer resolves the parent project first.
pub async fn get_task_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, status, due_date, project_id, created_at, updated_at
        FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(task)
}

/// Lists the tasks of a project with an optional status filter and a
/// validated sort key and direction. The sort column and order keyword come
/// from fixed enums, never from raw user input.
pub async fn list_tasks(
    conn: &mut DbConn,
    project_id: Uuid,
    status: Option<TaskStatus>,
    sort_by: TaskSortKey,
    order: SortOrder,
) -> Result<Vec<Task>> {
    let mut sql = format!("SELECT {} FROM tasks WHERE project_id = ?", TASK_COLUMNS);
    if status.is_some() {
        sql.push_str(" AND status = ?");
    }
    sql.push_str(&format!(
        " ORDER BY {} {}",
        sort_by.column(),
        order.keyword()
    ));

    let mut query = sqlx::query_as::<_, Task>(&sql).bind(project_id);
    if let Some(status) = status {
        query = query.bind(status);
    }

    let tasks = query.fetch_all(&mut *conn).await.map_err(Error::Sqlx)?;

    Ok(tasks)
}

/// Applies a partial update to a task: `None` fields keep their stored
/// values. Expects the task to exist.
pub async fn update_task(conn: &mut DbConn, id: Uuid, update: UpdateTask) -> Result<Task> {
    let task = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = COALESCE(?, title),
            description = COALESCE(?, description),
            status = COALESCE(?, status),
            due_date = COALESCE(?, due_date),
            updated_at = ?
        WHERE id = ?
        RETURNING id, title, description, status, due_date, project_id, created_at, updated_at
        "#,
    )
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.status)
    .bind(update.due_date)
    .bind(Utc::now())
    .bind(id)
    .fetch_one(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(task)
}

/// Deletes a task by its ID. Returns the number of rows removed.
pub async fn delete_task(conn: &mut DbConn, id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}

/// Deletes every task belonging to a project. Used by the project cascade
/// delete. Returns the number of rows removed.
pub async fn delete_tasks_by_project(conn: &mut DbConn, project_id: Uuid) -> Result<u64> {
    let rows_affected = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE project_id = ?
        "#,
    )
    .bind(project_id)
    .execute(&mut *conn)
    .await
    .map_err(Error::Sqlx)?
    .rows_affected();

    Ok(rows_affected)
}
