use std::sync::Arc;

use crate::directory::TerritoryDirectory;
use crate::services::{GameStateCoordinator, SilhouetteFetcher, TerritoryCache, TerritorySelector};

/// Application state containing shared resources
///
/// Built once at startup and handed to handlers through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide territory list cache
    pub territories: Arc<TerritoryCache>,
    /// The single shared game binding
    pub game: Arc<GameStateCoordinator>,
}

impl AppState {
    /// Wire the cache, fetcher and coordinator over one directory.
    pub fn new(directory: Arc<dyn TerritoryDirectory>, selector: Arc<dyn TerritorySelector>) -> Self {
        let territories = Arc::new(TerritoryCache::new(Arc::clone(&directory)));
        let fetcher = SilhouetteFetcher::new(directory);
        let game = Arc::new(GameStateCoordinator::new(
            Arc::clone(&territories),
            selector,
            fetcher,
        ));

        Self { territories, game }
    }
}
