use crate::clock::{date_key, normalize_date};
use crate::errors::AppError;
use crate::models::{CreateTodoRequest, DateSummary, MessageResponse, PerformanceQuery, Todo};
use crate::performance::{completion_percent, summarize};
use crate::service;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::{render_index, DayTile};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use std::collections::BTreeMap;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = state.clock.today();
    let key = date_key(today);
    let data = state.data.lock().await;
    let tiles = state.users.each_ref().map(|user| {
        let day = summarize(&data, user, Some(today))
            .remove(&key)
            .unwrap_or_default();
        DayTile {
            total: day.total,
            done: day.done,
            percent: completion_percent(day.done, day.total),
        }
    });
    Html(render_index(&key, &state.users, &tiles))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let today = state.clock.today();
    let now = state.clock.now();
    let mut data = state.data.lock().await;
    let todo = service::create_todo(
        &mut data,
        today,
        now,
        &payload.user,
        &payload.task,
        &payload.date,
    )?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(todo))
}

pub async fn list_todos(
    State(state): State<AppState>,
    Path((user, date)): Path<(String, String)>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(service::list_todos(&data, &user, &date)?))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let today = state.clock.today();
    let now = state.clock.now();
    let mut data = state.data.lock().await;
    let todo = service::toggle_todo(&mut data, today, now, &id)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let today = state.clock.today();
    let mut data = state.data.lock().await;
    service::delete_todo(&mut data, today, &id)?;

    persist_data(&state.data_path, &data).await?;

    Ok(Json(MessageResponse {
        message: "Deleted".to_string(),
    }))
}

pub async fn performance(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<PerformanceQuery>,
) -> Result<Json<BTreeMap<String, DateSummary>>, AppError> {
    let filter = match query.date.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(normalize_date(raw)?),
        _ => None,
    };
    let data = state.data.lock().await;
    Ok(Json(summarize(&data, &user, filter)))
}
