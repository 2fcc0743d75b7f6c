use crossline_backend::db::require_db;
use crossline_backend::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crossline_backend::repos::players::{find_credentials, find_player};

use crate::support::build_test_state;

#[tokio::test]
async fn register_trims_and_persists() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let player = state.players.register(db, "  ada  ", "analytical").await?;
    assert_eq!(player.display_name, "ada");

    assert_eq!(find_player(db, player.id).await?, Some(player.clone()));

    // Only the hash is stored.
    let creds = find_credentials(db, "ada").await?.ok_or("missing credentials")?;
    assert_eq!(creds.player, player);
    assert_ne!(creds.password_hash, "analytical");
    assert!(creds.password_hash.starts_with("$2"));
    Ok(())
}

#[tokio::test]
async fn duplicate_name_is_a_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let first = state.players.register(db, "sam", "pw-one").await?;
    let err = state.players.register(db, " sam ", "pw-two").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DisplayNameTaken, _)
    ));

    // Names are case-sensitive.
    let other = state.players.register(db, "Sam", "pw-two").await?;
    assert_ne!(first.id, other.id);
    Ok(())
}

#[tokio::test]
async fn blank_name_or_empty_password_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = state.players.register(db, " \t ", "pw").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidDisplayName, _)
    ));

    let err = state.players.register(db, "ben", "").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPassword, _)
    ));
    assert!(find_credentials(db, "ben").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn login_checks_the_password() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let registered = state.players.register(db, "ada", "analytical").await?;

    let player = state.players.login(db, "  ada ", "analytical").await?;
    assert_eq!(player, registered);

    for (name, password) in [("ada", "Analytical"), ("ada", ""), ("nobody", "analytical"), ("", "x")] {
        let err = state.players.login(db, name, password).await.unwrap_err();
        assert!(
            matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidCredentials, _)
            ),
            "{name:?}/{password:?} gave {err:?}"
        );
    }
    Ok(())
}
