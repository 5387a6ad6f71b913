use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/todos.json"))
}

// The two names shown on the dashboard. The API itself accepts any user
// string; this only decides which panels the page renders.
pub fn resolve_users() -> [String; 2] {
    if let Ok(raw) = env::var("APP_USERS") {
        let mut parts = raw.splitn(2, ',').map(|part| part.trim().to_string());
        if let (Some(first), Some(second)) = (parts.next(), parts.next()) {
            if !first.is_empty() && !second.is_empty() {
                return [first, second];
            }
        }
    }

    ["Anokhi".to_string(), "Raju".to_string()]
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse todo store: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read todo store: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
