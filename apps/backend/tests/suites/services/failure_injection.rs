use std::sync::Arc;

use worldle_backend::test_support::{FakeDirectory, FixedSelector};
use worldle_backend::{DirectoryError, GameError};

use crate::common::{brazil_japan_directory, fixed_state, state_with};

#[tokio::test]
async fn test_list_failure_leaves_game_uninitialized() {
    let (state, dir) = fixed_state("japan");
    dir.fail_next_lists(1, DirectoryError::Store("permission denied".into()));

    let err = state.game.start_game("s1").await.unwrap_err();
    assert!(matches!(err, GameError::Load(ref d) if d.contains("permission denied")));

    assert_eq!(
        state.game.get_silhouette().await,
        Err(GameError::NotInitialized)
    );
    assert_eq!(
        state.game.current_answer().await,
        Err(GameError::NotInitialized)
    );
    assert!(!state.territories.is_populated().await);
}

#[tokio::test]
async fn test_start_recovers_after_transient_list_failure() {
    let (state, dir) = fixed_state("brazil");
    dir.fail_next_lists(2, DirectoryError::Transport("dns failure".into()));

    assert!(state.game.start_game("s1").await.is_err());
    assert!(state.game.start_game("s1").await.is_err());
    state.game.start_game("s1").await.unwrap();

    assert_eq!(state.game.current_answer().await.unwrap(), "BRAZIL");
    assert_eq!(dir.list_calls(), 3);
}

#[tokio::test]
async fn test_fetch_failure_does_not_commit() {
    let (state, dir) = fixed_state("japan");
    dir.fail_next_fetches(1, DirectoryError::Transport("connection reset".into()));

    let err = state.game.start_game("s1").await.unwrap_err();
    assert!(matches!(err, GameError::Fetch(ref d) if d.contains("connection reset")));
    assert_eq!(state.game.current_session().await, None);

    // The territory list stays cached across the failed start.
    assert!(state.territories.is_populated().await);
    state.game.start_game("s1").await.unwrap();
    assert_eq!(dir.list_calls(), 1);
}

#[tokio::test]
async fn test_unexpected_status_is_fetch_error() {
    let dir = Arc::new(brazil_japan_directory().with_status("japan", 500));
    let state = state_with(dir, Arc::new(FixedSelector::new("japan")));

    let err = state.game.start_game("s1").await.unwrap_err();
    assert!(matches!(err, GameError::Fetch(ref d) if d.contains("500")));
}

#[tokio::test]
async fn test_empty_listing_is_load_error() {
    let dir = Arc::new(FakeDirectory::with_territories(Vec::<String>::new()));
    let state = state_with(dir, Arc::new(FixedSelector::new("japan")));

    assert!(matches!(
        state.game.start_game("s1").await,
        Err(GameError::Load(_))
    ));
}
