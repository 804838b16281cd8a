use crate::models::ProfileRecord;
use crate::services::dataset::{load_dataset, LoadError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Immutable dataset snapshot shared between concurrent requests
pub type Dataset = Arc<Vec<ProfileRecord>>;

/// Dataset access for the HTTP layer.
///
/// Snapshots are cached per path for `ttl_secs`; a TTL of zero reloads the
/// file on every call. Failed loads are never cached.
#[derive(Clone)]
pub struct DatasetStore {
    path: PathBuf,
    cache: Option<moka::future::Cache<PathBuf, Dataset>>,
}

impl DatasetStore {
    pub fn new<P: AsRef<Path>>(path: P, ttl_secs: u64) -> Self {
        let cache = (ttl_secs > 0).then(|| {
            moka::future::CacheBuilder::new(1)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build()
        });

        Self {
            path: path.as_ref().to_path_buf(),
            cache,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current snapshot, loading it on a blocking thread when needed.
    pub async fn get(&self) -> Result<Dataset, Arc<LoadError>> {
        match &self.cache {
            Some(cache) => {
                cache
                    .try_get_with(self.path.clone(), load_blocking(self.path.clone()))
                    .await
            }
            None => load_blocking(self.path.clone()).await.map_err(Arc::new),
        }
    }

    /// Drop the cached snapshot so the next call reloads the file
    pub async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate(&self.path).await;
            tracing::debug!("Invalidated dataset snapshot: {}", self.path.display());
        }
    }
}

async fn load_blocking(path: PathBuf) -> Result<Dataset, LoadError> {
    tokio::task::spawn_blocking(move || load_dataset(&path))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
        .map(Arc::new)
}
