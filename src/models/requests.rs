//! Request and query-string DTOs for the HTTP surface.
//!
//! Required fields default to empty strings instead of failing
//! deserialization, so that missing input is reported as a 400 validation
//! error with the regular error body rather than a deserializer rejection.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

/// Project updates are full overwrites: an omitted description unsets the
/// stored one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    /// Parsed in the service layer; invalid values are a 400, absent means `todo`.
    pub status: Option<String>,
    /// RFC 3339 or `YYYY-MM-DD`; unparsable input is a 400.
    pub due_date: Option<String>,
}

/// Task updates are partial merges: omitted fields keep their stored values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksQuery {
    /// Status filter; unrecognized values are ignored, not rejected.
    pub status: Option<String>,
    /// Sort key; unrecognized values fall back to creation order.
    pub sort_by: Option<String>,
    /// `desc` for descending, anything else ascending.
    pub order: Option<String>,
}
