//! Game-level error types used by the state layer and its asset store.
//!
//! These types are HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `GameError`
//! using the provided `From<GameError> for AppError` implementation.

use thiserror::Error;

/// Failures reported by a [`TerritoryDirectory`](crate::directory::TerritoryDirectory).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The store could not list its territories (or listed none)
    #[error("store error: {0}")]
    Store(String),
    /// The store is not configured well enough to build a locator
    #[error("config error: {0}")]
    Config(String),
    /// The request never produced a usable response
    #[error("transport error: {0}")]
    Transport(String),
    /// The store has no object at the requested locator
    #[error("no object at {0}")]
    NotFound(String),
    /// The store answered with a non-success status
    #[error("unexpected status {status} from {locator}")]
    Status { status: u16, locator: String },
}

/// Errors surfaced by the game state layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Territory list unavailable or empty
    #[error("failed to load territories: {0}")]
    Load(String),
    /// Selection attempted on an empty pool
    #[error("territory pool is empty")]
    EmptyPool,
    /// No silhouette stored for the territory
    #[error("silhouette not found for territory {0}")]
    NotFound(String),
    /// Silhouette retrieval failed
    #[error("failed to fetch silhouette: {0}")]
    Fetch(String),
    /// Silhouette or answer requested before any game was committed
    #[error("game not initialized")]
    NotInitialized,
}

impl GameError {
    /// Map a directory list failure.
    pub fn load(err: DirectoryError) -> Self {
        Self::Load(err.to_string())
    }

    /// Map a failure while resolving or fetching a territory's silhouette.
    pub fn fetch(territory: &str, err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => Self::NotFound(territory.to_string()),
            other => Self::Fetch(other.to_string()),
        }
    }
}
