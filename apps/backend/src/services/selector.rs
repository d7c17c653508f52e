//! Target territory selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::GameError;

/// Picks the territory a new game is played on.
pub trait TerritorySelector: Send + Sync {
    fn pick<'a>(&self, territories: &'a [String]) -> Result<&'a str, GameError>;
}

/// Uniform pick from a generator seeded from OS entropy on every call, so
/// separate processes never replay the same sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl TerritorySelector for RandomSelector {
    fn pick<'a>(&self, territories: &'a [String]) -> Result<&'a str, GameError> {
        if territories.is_empty() {
            return Err(GameError::EmptyPool);
        }

        let mut rng = StdRng::from_os_rng();
        let index = rng.random_range(0..territories.len());
        Ok(territories[index].as_str())
    }
}
