use std::sync::Arc;

use actix_web::test;
use worldle_backend::test_support::{create_test_app, FakeDirectory, FixedSelector};

use crate::common::{read_json, state_with};

#[actix_web::test]
async fn test_territories_are_display_formatted_and_cached() {
    let dir = Arc::new(FakeDirectory::with_territories([
        "south_korea",
        "brazil",
        "united_states",
    ]));
    let state = state_with(dir.clone(), Arc::new(FixedSelector::new("brazil")));
    let app = create_test_app(state).await;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/api/territories").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let json = read_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!(["SOUTH KOREA", "BRAZIL", "UNITED STATES"])
        );
    }

    assert_eq!(dir.list_calls(), 1);
}
