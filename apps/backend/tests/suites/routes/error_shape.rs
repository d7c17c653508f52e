use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use worldle_backend::test_support::{create_test_app, FakeDirectory, FixedSelector};
use worldle_backend::DirectoryError;

use crate::common::{fixed_state, state_with};

#[actix_web::test]
async fn test_silhouette_before_new_game_is_not_initialized() {
    let (state, _) = fixed_state("japan");
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/silhouette").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_INITIALIZED",
        StatusCode::CONFLICT,
        Some("not initialized"),
    )
    .await;
    assert_ne!(problem.trace_id, "unknown");
    assert_eq!(problem.title, "Game Not Initialized");
}

#[actix_web::test]
async fn test_answer_before_new_game_is_not_initialized() {
    let (state, _) = fixed_state("japan");
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/answer").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_INITIALIZED",
        StatusCode::CONFLICT,
        None,
    )
    .await;
}

#[actix_web::test]
async fn test_unknown_route_is_problem_not_found() {
    let (state, _) = fixed_state("japan");
    let app = create_test_app(state).await;

    let req = test::TestRequest::get().uri("/api/guess").to_request();
    let resp = test::call_service(&app, req).await;

    let problem = assert_problem_details_from_service_response(
        resp,
        "NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("/api/guess"),
    )
    .await;
    assert_eq!(problem.title, "Not Found");
}

#[actix_web::test]
async fn test_missing_silhouette_is_server_error() {
    // Listed, but no image stored for it.
    let dir = Arc::new(FakeDirectory::with_territories(["japan"]));
    let state = state_with(dir, Arc::new(FixedSelector::new("japan")));
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/newgame?sessionId=s1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "SILHOUETTE_NOT_FOUND",
        StatusCode::INTERNAL_SERVER_ERROR,
        Some("japan"),
    )
    .await;
}

#[actix_web::test]
async fn test_fetch_failure_is_server_error() {
    let (state, dir) = fixed_state("japan");
    dir.fail_next_fetches(1, DirectoryError::Transport("connection reset".into()));
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/newgame?sessionId=s1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "SILHOUETTE_FETCH_FAILED",
        StatusCode::INTERNAL_SERVER_ERROR,
        Some("connection reset"),
    )
    .await;
}
