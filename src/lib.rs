pub mod app;
pub mod clock;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod performance;
pub mod service;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path, resolve_users};
