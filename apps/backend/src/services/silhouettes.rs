//! Silhouette retrieval.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::directory::TerritoryDirectory;
use crate::errors::{DirectoryError, GameError};

/// Resolves a territory's image locator and reads its bytes. No retries.
///
/// Any 2xx body is accepted as-is, an empty one included.
pub struct SilhouetteFetcher {
    directory: Arc<dyn TerritoryDirectory>,
}

impl SilhouetteFetcher {
    pub fn new(directory: Arc<dyn TerritoryDirectory>) -> Self {
        Self { directory }
    }

    pub async fn fetch(&self, territory: &str) -> Result<Bytes, GameError> {
        let locator = self
            .directory
            .resolve_image_location(territory)
            .map_err(|e| {
                warn!(territory, error = %e, "Failed to resolve silhouette location");
                GameError::fetch(territory, e)
            })?;

        let asset = self.directory.fetch_bytes_at(&locator).await.map_err(|e| {
            warn!(territory, error = %e, "Failed to fetch silhouette");
            GameError::fetch(territory, e)
        })?;

        match asset.status {
            200..=299 => {
                debug!(territory, bytes = asset.body.len(), "Fetched silhouette");
                Ok(asset.body)
            }
            404 => Err(GameError::NotFound(territory.to_string())),
            status => {
                warn!(territory, status, "Silhouette fetch returned unexpected status");
                Err(GameError::fetch(
                    territory,
                    DirectoryError::Status { status, locator },
                ))
            }
        }
    }
}
