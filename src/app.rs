use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/todo", post(handlers::create_todo))
        .route("/api/todo/:user/:date", get(handlers::list_todos))
        .route(
            "/api/todo/:id",
            put(handlers::toggle_todo).delete(handlers::delete_todo),
        )
        .route("/api/performance/:user", get(handlers::performance))
        .with_state(state)
}
