use crossline_backend::adapters::players_sea;
use crossline_backend::db::require_db;
use uuid::Uuid;

use crate::support::build_test_state;

#[tokio::test]
async fn create_then_find() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let id = Uuid::new_v4();

    let row = players_sea::create_player(db, id, "alice", "hash").await?;
    assert_eq!(row.id, id);
    assert_eq!(row.display_name, "alice");
    assert_eq!(row.password_hash, "hash");

    let found = players_sea::find_by_id(db, id).await?;
    assert_eq!(found.map(|p| p.display_name).as_deref(), Some("alice"));
    assert!(players_sea::find_by_id(db, Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn find_by_display_name_is_exact() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let id = Uuid::new_v4();
    players_sea::create_player(db, id, "alice", "hash").await?;

    let found = players_sea::find_by_display_name(db, "alice").await?;
    assert_eq!(found.map(|p| p.id), Some(id));
    assert!(players_sea::find_by_display_name(db, "Alice").await?.is_none());
    assert!(players_sea::find_by_display_name(db, "alic").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn same_id_twice_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let id = Uuid::new_v4();

    players_sea::create_player(db, id, "alice", "hash").await?;
    assert!(players_sea::create_player(db, id, "again", "hash").await.is_err());
    Ok(())
}

#[tokio::test]
async fn same_name_twice_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    players_sea::create_player(db, Uuid::new_v4(), "alice", "hash").await?;
    let err = players_sea::create_player(db, Uuid::new_v4(), "alice", "hash")
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    Ok(())
}
