// GameService over SeaGameStore and in-memory SQLite, no HTTP.

use crossline_backend::adapters::games_sea;
use crossline_backend::db::require_db;
use crossline_backend::domain::{GameStatus, Symbol};
use crossline_backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crossline_backend::protocol::{CreateGameRequest, MakeMoveRequest};
use crossline_backend::repos::games::{GameStore, SeaGameStore};

use crate::support::build_test_state;
use crate::support::factory::{create_seated_game, create_test_game, create_test_player};

fn mv(row: i64, column: i64) -> MakeMoveRequest {
    MakeMoveRequest { row, column }
}

#[tokio::test]
async fn diagonal_win_on_larger_board() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_player(&state, "alice").await?;
    let bob = create_test_player(&state, "bob").await?;
    let game = create_test_game(&state, alice.id, Some(4), Some(3)).await?;
    let db = require_db(&state)?;
    let store = SeaGameStore::new(db);
    state.games.get_or_join(&store, game.id, bob.id).await?;

    let script = [
        (alice.id, 0, 0),
        (bob.id, 0, 3),
        (alice.id, 1, 1),
        (bob.id, 1, 3),
    ];
    for (player, r, c) in script {
        let view = state.games.make_move(&store, game.id, mv(r, c), player, None).await?;
        assert_eq!(view.status, GameStatus::Active);
    }
    let view = state
        .games
        .make_move(&store, game.id, mv(2, 2), alice.id, None)
        .await?;
    assert_eq!(view.status, GameStatus::XWin);
    assert_eq!(view.board[2][2], Some(Symbol::X));
    // Version: 1 create, 2 join, then one per move.
    assert_eq!(view.version, 7);
    Ok(())
}

#[tokio::test]
async fn full_board_without_line_is_finished() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, alice, bob) = create_seated_game(&state).await?;
    let db = require_db(&state)?;
    let store = SeaGameStore::new(db);

    // X O X / X O O / O X X
    let script = [
        (alice.id, 0, 0),
        (bob.id, 0, 1),
        (alice.id, 0, 2),
        (bob.id, 1, 1),
        (alice.id, 1, 0),
        (bob.id, 1, 2),
        (alice.id, 2, 1),
        (bob.id, 2, 0),
    ];
    for (player, r, c) in script {
        state.games.make_move(&store, game.id, mv(r, c), player, None).await?;
    }
    let view = state
        .games
        .make_move(&store, game.id, mv(2, 2), alice.id, None)
        .await?;
    assert_eq!(view.status, GameStatus::Finished);
    assert!(view.board.iter().flatten().all(Option::is_some));

    let listed = state.games.list_games(&store, alice.id).await?;
    assert!(listed.iter().all(|g| g.id != game.id));
    Ok(())
}

#[tokio::test]
async fn failed_moves_leave_the_game_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, alice, bob) = create_seated_game(&state).await?;
    let db = require_db(&state)?;
    let store = SeaGameStore::new(db);

    state.games.make_move(&store, game.id, mv(1, 1), alice.id, None).await?;

    let occupied = state
        .games
        .make_move(&store, game.id, mv(1, 1), bob.id, None)
        .await
        .unwrap_err();
    assert!(matches!(
        occupied,
        DomainError::Conflict(ConflictKind::CellOccupied, _)
    ));

    let oob = state
        .games
        .make_move(&store, game.id, mv(-1, 0), bob.id, None)
        .await
        .unwrap_err();
    assert!(matches!(
        oob,
        DomainError::Validation(ValidationKind::OutOfBounds, _)
    ));

    let stored = store.load_game(game.id).await?;
    assert_eq!(stored.version, game.version + 1);
    assert_eq!(stored.board.filled_count(), 1);
    Ok(())
}

#[tokio::test]
async fn stale_version_loses_the_race() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, alice, _) = create_seated_game(&state).await?;
    let db = require_db(&state)?;
    let store = SeaGameStore::new(db);

    let loaded = store.load_game(game.id).await?;
    state.games.make_move(&store, game.id, mv(0, 0), alice.id, None).await?;

    // A second writer still holding the old version.
    let err = store.update_game(&loaded, loaded.version).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));
    assert!(err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn invalid_config_is_rejected_before_storage() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_player(&state, "alice").await?;
    let db = require_db(&state)?;
    let store = SeaGameStore::new(db);

    let req = CreateGameRequest {
        board_size: Some(3),
        win_condition: Some(4),
    };
    let err = state.games.create_game(&store, req, alice.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidBoardConfig, _)
    ));
    assert!(state.games.list_games(&store, alice.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn board_column_stays_null_until_first_move() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, alice, _) = create_seated_game(&state).await?;
    let db = require_db(&state)?;
    let store = SeaGameStore::new(db);

    let row = games_sea::require_game(db, game.id).await?;
    assert_eq!(row.version, 2);
    assert_eq!(row.board_state, None);

    state.games.make_move(&store, game.id, mv(0, 0), alice.id, None).await?;
    let row = games_sea::require_game(db, game.id).await?;
    assert_eq!(
        row.board_state.as_deref(),
        Some(r#"[["X",null,null],[null,null,null],[null,null,null]]"#)
    );
    Ok(())
}
