//! Error codes for the Worldle backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Worldle backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// No route matches the request
    NotFound,

    // Game State
    /// Silhouette or answer requested before any game was started
    GameNotInitialized,
    /// Territory list could not be loaded from the asset store
    TerritoriesUnavailable,
    /// Selection attempted over an empty territory pool
    EmptyTerritoryPool,
    /// Asset store has no silhouette for the selected territory
    SilhouetteNotFound,
    /// Silhouette retrieval failed for a reason other than not-found
    SilhouetteFetchFailed,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",

            Self::GameNotInitialized => "GAME_NOT_INITIALIZED",
            Self::TerritoriesUnavailable => "TERRITORIES_UNAVAILABLE",
            Self::EmptyTerritoryPool => "EMPTY_TERRITORY_POOL",
            Self::SilhouetteNotFound => "SILHOUETTE_NOT_FOUND",
            Self::SilhouetteFetchFailed => "SILHOUETTE_FETCH_FAILED",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
