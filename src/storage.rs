use crate::errors::AppError;
use crate::models::AppData;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    env::var("HYDRATION_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/hydration.json"))
}

/// Loads the data file leniently: a missing file is a fresh start and a
/// corrupt one is logged and replaced with defaults on the next write.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}
