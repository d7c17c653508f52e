//! Territory identifier formatting.
//!
//! The asset store keys territories by snake_cased lowercase tokens
//! (`south_korea`). Players only ever see the display form (`SOUTH KOREA`).
//! The transformation is one-way.

/// Display form of a stored territory identifier: uppercase, underscores
/// replaced with spaces.
pub fn display_name(identifier: &str) -> String {
    identifier.to_uppercase().replace('_', " ")
}
