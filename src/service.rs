use crate::clock::{date_key, normalize_date};
use crate::models::{AppData, Todo, TodoStatus};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Why a todo operation was refused. `PastDate` is the policy at the heart of
/// the app: once a calendar day has elapsed, its todos are read-only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    PastDate(&'static str),
    #[error("Todo not found")]
    NotFound,
}

fn invalid(err: impl std::fmt::Display) -> TodoError {
    TodoError::Validation(err.to_string())
}

pub fn create_todo(
    data: &mut AppData,
    today: NaiveDate,
    now: DateTime<Utc>,
    user: &str,
    task: &str,
    date: &str,
) -> Result<Todo, TodoError> {
    let user = user.trim();
    let task = task.trim();
    if user.is_empty() {
        return Err(TodoError::Validation("user is required".into()));
    }
    if task.is_empty() {
        return Err(TodoError::Validation("task is required".into()));
    }

    let date = normalize_date(date).map_err(invalid)?;
    if date < today {
        return Err(TodoError::PastDate("Cannot add todo for past days"));
    }

    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        user: user.to_string(),
        task: task.to_string(),
        date: date_key(date),
        status: TodoStatus::Pending,
        completed_at: None,
        created_at: now,
        updated_at: now,
    };
    data.todos.insert(todo.id.clone(), todo.clone());
    Ok(todo)
}

pub fn list_todos(data: &AppData, user: &str, date: &str) -> Result<Vec<Todo>, TodoError> {
    let key = date_key(normalize_date(date).map_err(invalid)?);
    Ok(data
        .todos
        .values()
        .filter(|todo| todo.user == user && todo.date == key)
        .cloned()
        .collect())
}

pub fn toggle_todo(
    data: &mut AppData,
    today: NaiveDate,
    now: DateTime<Utc>,
    id: &str,
) -> Result<Todo, TodoError> {
    let todo = data.todos.get_mut(id).ok_or(TodoError::NotFound)?;
    if stored_date(todo)? < today {
        return Err(TodoError::PastDate("Cannot edit old todos"));
    }

    match todo.status {
        TodoStatus::Pending => {
            todo.status = TodoStatus::Done;
            todo.completed_at = Some(now);
        }
        TodoStatus::Done => {
            todo.status = TodoStatus::Pending;
            todo.completed_at = None;
        }
    }
    todo.updated_at = now;
    Ok(todo.clone())
}

pub fn delete_todo(data: &mut AppData, today: NaiveDate, id: &str) -> Result<(), TodoError> {
    let todo = data.todos.get(id).ok_or(TodoError::NotFound)?;
    if stored_date(todo)? < today {
        return Err(TodoError::PastDate("Cannot delete old todos"));
    }
    data.todos.remove(id);
    Ok(())
}

// Stored dates are written canonically, but the store file is plain JSON and
// can be edited by hand; re-parse rather than trust the string.
fn stored_date(todo: &Todo) -> Result<NaiveDate, TodoError> {
    normalize_date(&todo.date).map_err(invalid)
}
