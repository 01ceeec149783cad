use chrono::Utc;
use uuid::Uuid;

use crate::{
    database::DbConn,
    error::{Error, Result},
    models::users::{NewUser, User},
};

/// Creates a new user in the database.
pub async fn create_user(conn: &mut DbConn, new_user: NewUser) -> Result<User> {
    let now = Utc::now();
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        // Check for unique constraint violations on the email column
        let error_msg = e.to_string().to_lowercase();
        if error_msg.contains("unique") || error_msg.contains("duplicate") {
            Error::Validation("User already exists with this email".to_string())
        } else {
            Error::Sqlx(e)
        }
    })?;

    Ok(user)
}

/// Gets a single user by their ID. The user may not exist.
pub async fn get_user_by_id(conn: &mut DbConn, id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(user)
}

/// Gets a single user by their email address. The user may not exist.
/// The lookup is case-sensitive, matching how emails are stored.
pub async fn get_user_by_email(conn: &mut DbConn, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await
    .map_err(Error::Sqlx)?;

    Ok(user)
}
