//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: unified logging
//! initialization and assertions over the problem-details error contract.

pub mod logging;
pub mod problem_details;
