use actix_web::test;
use worldle_backend::test_support::create_test_app;

use crate::common::{fixed_state, read_json};

#[actix_web::test]
async fn test_new_game_echoes_supplied_session() {
    let (state, _) = fixed_state("japan");
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::get()
        .uri("/api/newgame?sessionId=abc-123")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let json = read_json(resp).await;
    assert_eq!(json["sessionId"], "abc-123");
    assert_eq!(state.game.current_session().await.as_deref(), Some("abc-123"));
}

#[actix_web::test]
async fn test_new_game_mints_session_when_absent() {
    let (state, _) = fixed_state("japan");
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::get().uri("/api/newgame").to_request();
    let json = read_json(test::call_service(&app, req).await).await;

    let session = json["sessionId"].as_str().expect("sessionId should be a string");
    assert!(uuid::Uuid::parse_str(session).is_ok(), "minted session should be a UUID: {session}");
    assert_eq!(state.game.current_session().await.as_deref(), Some(session));
}

#[actix_web::test]
async fn test_reload_with_same_session_keeps_answer() {
    let (state, dir) = fixed_state("japan");
    let app = create_test_app(state.clone()).await;

    for _ in 0..3 {
        let req = test::TestRequest::get()
            .uri("/api/newgame?sessionId=s1")
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }

    assert_eq!(dir.fetch_calls(), 1);
    assert_eq!(state.game.current_answer().await.unwrap(), "JAPAN");
}

#[actix_web::test]
async fn test_new_game_failure_is_server_error() {
    let (state, dir) = fixed_state("japan");
    dir.fail_next_lists(
        1,
        worldle_backend::DirectoryError::Store("bucket unreachable".into()),
    );
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/api/newgame?sessionId=s1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let json = read_json(resp).await;
    assert_eq!(json["code"], "TERRITORIES_UNAVAILABLE");
}
