pub mod game_state;
pub mod selector;
pub mod silhouettes;
pub mod territory_cache;

pub use game_state::{GameStateCoordinator, StartOutcome};
pub use selector::{RandomSelector, TerritorySelector};
pub use silhouettes::SilhouetteFetcher;
pub use territory_cache::TerritoryCache;
