use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub user: String,
    pub task: String,
    /// Canonical `YYYY-MM-DD` key, normalized before storage.
    pub date: String,
    pub status: TodoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub todos: BTreeMap<String, Todo>,
}

// Extra body fields (a client-supplied status, for one) are dropped on the
// floor; creation always starts pending.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub user: String,
    pub task: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct PerformanceQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DateSummary {
    pub total: u64,
    pub done: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
