//! Domain layer: pure game logic types and helpers.

pub mod territory;

pub use territory::display_name;
