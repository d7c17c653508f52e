//! The single shared game binding.
//!
//! Exactly one binding exists per process: the session that last started a
//! game, its territory and that territory's silhouette. Starting a game for
//! a different session replaces the binding wholesale; starting again for the
//! same session is a no-op so a page reload does not reveal a new country.
//!
//! `start_game` holds the exclusive lock across selection and fetch. All
//! starts are serialized process-wide and a commit is never interleaved with
//! another one.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::selector::TerritorySelector;
use super::silhouettes::SilhouetteFetcher;
use super::territory_cache::TerritoryCache;
use crate::domain::display_name;
use crate::errors::GameError;

/// Committed session → territory + silhouette association.
#[derive(Debug, Clone)]
struct GameBinding {
    session_id: String,
    /// Display form, e.g. `SOUTH KOREA`.
    territory: String,
    silhouette: Bytes,
}

/// What a successful `start_game` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The session already owned the binding; nothing changed.
    Reused,
    /// A new territory was selected and committed.
    Created,
}

pub struct GameStateCoordinator {
    cache: Arc<TerritoryCache>,
    selector: Arc<dyn TerritorySelector>,
    fetcher: SilhouetteFetcher,
    binding: RwLock<Option<GameBinding>>,
}

impl GameStateCoordinator {
    pub fn new(
        cache: Arc<TerritoryCache>,
        selector: Arc<dyn TerritorySelector>,
        fetcher: SilhouetteFetcher,
    ) -> Self {
        Self {
            cache,
            selector,
            fetcher,
            binding: RwLock::new(None),
        }
    }

    /// Start (or resume) the game for `session_id`.
    ///
    /// Any string, including the empty string, is a valid session id. On
    /// failure the previous binding is left intact.
    pub async fn start_game(&self, session_id: &str) -> Result<StartOutcome, GameError> {
        let mut binding = self.binding.write().await;

        if let Some(current) = binding.as_ref() {
            if current.session_id == session_id && !current.territory.is_empty() {
                info!("Reusing existing game session");
                return Ok(StartOutcome::Reused);
            }
        }

        let territories = self.cache.get_territories().await?;
        let territory = self.selector.pick(&territories)?;
        let silhouette = self.fetcher.fetch(territory).await?;

        debug!(territory, "Selected territory for new game");
        *binding = Some(GameBinding {
            session_id: session_id.to_string(),
            territory: display_name(territory),
            silhouette,
        });
        info!("Started new game");

        Ok(StartOutcome::Created)
    }

    /// Silhouette bytes of the committed game.
    pub async fn get_silhouette(&self) -> Result<Bytes, GameError> {
        let binding = self.binding.read().await;
        binding
            .as_ref()
            .map(|b| b.silhouette.clone())
            .ok_or(GameError::NotInitialized)
    }

    /// Display name of the committed game's territory.
    pub async fn current_answer(&self) -> Result<String, GameError> {
        let binding = self.binding.read().await;
        binding
            .as_ref()
            .map(|b| b.territory.clone())
            .ok_or(GameError::NotInitialized)
    }

    /// Session that owns the committed game, if any.
    pub async fn current_session(&self) -> Option<String> {
        self.binding
            .read()
            .await
            .as_ref()
            .map(|b| b.session_id.clone())
    }
}
