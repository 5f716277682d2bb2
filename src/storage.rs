use crate::errors::AppError;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::error;

// Every write rewrites the whole backing file.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl LocalStorage {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = load_items(&path).await;
        Self {
            path: Some(path),
            items: Arc::new(Mutex::new(items)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            items: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().await.get(key).cloned()
    }

    pub async fn set_item(&self, key: &str, value: impl Into<String>) -> Result<(), AppError> {
        let mut items = self.items.lock().await;
        if let Some(path) = &self.path {
            let mut next = items.clone();
            next.insert(key.to_string(), value.into());
            persist_items(path, &next).await?;
            *items = next;
        } else {
            items.insert(key.to_string(), value.into());
        }
        Ok(())
    }
}

async fn load_items(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                error!("failed to parse storage file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read storage file: {err}");
            BTreeMap::new()
        }
    }
}

async fn persist_items(path: &Path, items: &BTreeMap<String, String>) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(items)?;
    fs::write(path, payload).await?;
    Ok(())
}
