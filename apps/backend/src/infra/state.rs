use std::sync::Arc;

use crate::directory::TerritoryDirectory;
use crate::error::AppError;
use crate::services::{RandomSelector, TerritorySelector};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    directory: Option<Arc<dyn TerritoryDirectory>>,
    selector: Arc<dyn TerritorySelector>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            directory: None,
            selector: Arc::new(RandomSelector),
        }
    }

    pub fn with_directory(mut self, directory: Arc<dyn TerritoryDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_selector(mut self, selector: Arc<dyn TerritorySelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let directory = self
            .directory
            .ok_or_else(|| AppError::config("a territory directory is required"))?;
        Ok(AppState::new(directory, self.selector))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
