//! Asset store seam.
//!
//! A [`TerritoryDirectory`] knows which territories exist and where their
//! silhouettes live. It does no caching of its own; that belongs to
//! [`TerritoryCache`](crate::services::territory_cache::TerritoryCache).

pub mod firebase;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::DirectoryError;

pub use firebase::FirebaseDirectory;

/// Raw response from a byte fetch: status plus body.
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub status: u16,
    pub body: Bytes,
}

#[async_trait]
pub trait TerritoryDirectory: Send + Sync {
    /// List every territory identifier in store order.
    async fn list_territory_identifiers(&self) -> Result<Vec<String>, DirectoryError>;

    /// Build the locator (URL) of a territory's silhouette image.
    fn resolve_image_location(&self, identifier: &str) -> Result<String, DirectoryError>;

    /// Fetch whatever lives at `locator`.
    ///
    /// Non-2xx statuses are returned, not raised; only failures that never
    /// produced a status become `DirectoryError::Transport`.
    async fn fetch_bytes_at(&self, locator: &str) -> Result<FetchedAsset, DirectoryError>;
}
