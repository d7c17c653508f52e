use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::GameError;
use crate::services::TerritorySelector;

/// Deterministic selector: yields the given names in order, cycling.
pub struct FixedSelector {
    names: Vec<String>,
    picks: AtomicUsize,
}

impl FixedSelector {
    pub fn new(name: &str) -> Self {
        Self::sequence([name])
    }

    pub fn sequence<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            picks: AtomicUsize::new(0),
        }
    }

    /// Number of successful or failed `pick` calls so far.
    pub fn picks(&self) -> usize {
        self.picks.load(Ordering::SeqCst)
    }
}

impl TerritorySelector for FixedSelector {
    fn pick<'a>(&self, territories: &'a [String]) -> Result<&'a str, GameError> {
        if territories.is_empty() || self.names.is_empty() {
            return Err(GameError::EmptyPool);
        }

        let n = self.picks.fetch_add(1, Ordering::SeqCst);
        let wanted = &self.names[n % self.names.len()];
        territories
            .iter()
            .find(|t| *t == wanted)
            .map(String::as_str)
            .ok_or_else(|| GameError::Load(format!("{wanted} is not in the territory pool")))
    }
}
