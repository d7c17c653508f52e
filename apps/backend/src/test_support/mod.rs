//! Helpers shared by unit tests and the integration test binaries.

pub mod app_builder;
pub mod fake_directory;
pub mod fixed_selector;

pub use app_builder::create_test_app;
pub use fake_directory::FakeDirectory;
pub use fixed_selector::FixedSelector;
