//! Process-wide cache of the territory list.
//!
//! The list is loaded from the [`TerritoryDirectory`] on first use and kept
//! for the lifetime of the process. Loading happens under the exclusive lock,
//! so concurrent first callers queue behind a single directory call instead
//! of racing the store. A failed load leaves the cache empty and the next
//! caller retries.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::directory::TerritoryDirectory;
use crate::domain::display_name;
use crate::errors::GameError;

pub struct TerritoryCache {
    directory: Arc<dyn TerritoryDirectory>,
    /// `None` until a non-empty list has been committed, immutable after.
    entries: RwLock<Option<Arc<[String]>>>,
}

impl TerritoryCache {
    pub fn new(directory: Arc<dyn TerritoryDirectory>) -> Self {
        Self {
            directory,
            entries: RwLock::new(None),
        }
    }

    /// Territory identifiers in store order.
    ///
    /// Double-checked: shared-lock fast path, then an exclusive-lock re-check
    /// before the directory is contacted.
    pub async fn get_territories(&self) -> Result<Arc<[String]>, GameError> {
        {
            let entries = self.entries.read().await;
            if let Some(cached) = entries.as_ref() {
                debug!("Returning cached territories");
                return Ok(Arc::clone(cached));
            }
        }

        let mut entries = self.entries.write().await;
        if let Some(cached) = entries.as_ref() {
            debug!("Returning territories cached by a concurrent caller");
            return Ok(Arc::clone(cached));
        }

        info!("Loading territories from directory");
        let loaded = self
            .directory
            .list_territory_identifiers()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to load territories");
                GameError::load(e)
            })?;

        if loaded.is_empty() {
            warn!("Directory returned no territories");
            return Err(GameError::Load("directory returned no territories".into()));
        }

        let loaded: Arc<[String]> = loaded.into();
        *entries = Some(Arc::clone(&loaded));
        info!(count = loaded.len(), "Cached territories");

        Ok(loaded)
    }

    /// Territories in display form (`SOUTH KOREA`), same order as
    /// [`get_territories`](Self::get_territories).
    pub async fn formatted(&self) -> Result<Vec<String>, GameError> {
        let territories = self.get_territories().await?;
        Ok(territories.iter().map(|t| display_name(t)).collect())
    }

    pub async fn is_populated(&self) -> bool {
        self.entries.read().await.is_some()
    }
}
