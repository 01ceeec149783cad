use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Task workflow status.
///
/// Any status is reachable from any other; no transition graph is enforced
/// here. Stored and serialized as `todo` / `in-progress` / `done`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    /// Owning project. Set at creation, never reassigned. Access control is
    /// always derived from the parent project's owner, never from the task.
    pub project_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub project_id: Uuid,
}

/// Partial merge: `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Sort key for task listings. Unrecognized input falls back to creation
/// order rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    DueDate,
    Title,
    Status,
}

impl TaskSortKey {
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some("createdAt") => Self::CreatedAt,
            Some("updatedAt") => Self::UpdatedAt,
            Some("dueDate") => Self::DueDate,
            Some("title") => Self::Title,
            Some("status") => Self::Status,
            _ => Self::default(),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::DueDate => "due_date",
            Self::Title => "title",
            Self::Status => "status",
        }
    }
}

/// Sort direction. Only the literal string `desc` flips the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}
