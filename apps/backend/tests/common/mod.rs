#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use worldle_backend::services::TerritorySelector;
use worldle_backend::test_support::{FakeDirectory, FixedSelector};
use worldle_backend::{build_state, AppState};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// JPEG magic followed by a couple of payload bytes.
pub const JAPAN_BYTES: [u8; 6] = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
pub const BRAZIL_BYTES: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

/// Directory listing `brazil` and `japan`, both with images.
pub fn brazil_japan_directory() -> FakeDirectory {
    FakeDirectory::with_territories(["brazil", "japan"])
        .with_image("brazil", BRAZIL_BYTES.to_vec())
        .with_image("japan", JAPAN_BYTES.to_vec())
}

pub fn state_with(directory: Arc<FakeDirectory>, selector: Arc<dyn TerritorySelector>) -> AppState {
    build_state()
        .with_directory(directory)
        .with_selector(selector)
        .build()
        .expect("state should build")
}

/// State over [`brazil_japan_directory`] whose selector always picks `pick`.
pub fn fixed_state(pick: &str) -> (AppState, Arc<FakeDirectory>) {
    let dir = Arc::new(brazil_japan_directory());
    let state = state_with(dir.clone(), Arc::new(FixedSelector::new(pick)));
    (state, dir)
}

pub async fn read_json(resp: ServiceResponse<BoxBody>) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}
