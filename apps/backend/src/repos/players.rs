//! Player repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// Player as the rest of the backend sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: Uuid,
    pub display_name: String,
}

impl From<players::Model> for Player {
    fn from(row: players::Model) -> Self {
        Self {
            id: row.id,
            display_name: row.display_name,
        }
    }
}

/// A player together with the stored password hash, for login only.
pub struct PlayerCredentials {
    pub player: Player,
    pub password_hash: String,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    display_name: &str,
    password_hash: &str,
) -> Result<Player, DomainError> {
    let row =
        players_adapter::create_player(conn, Uuid::new_v4(), display_name, password_hash).await?;
    Ok(Player::from(row))
}

pub async fn find_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<Player>, DomainError> {
    let row = players_adapter::find_by_id(conn, player_id).await?;
    Ok(row.map(Player::from))
}

pub async fn find_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    display_name: &str,
) -> Result<Option<PlayerCredentials>, DomainError> {
    let row = players_adapter::find_by_display_name(conn, display_name).await?;
    Ok(row.map(|row| PlayerCredentials {
        password_hash: row.password_hash.clone(),
        player: Player::from(row),
    }))
}

pub async fn display_name_taken<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    display_name: &str,
) -> Result<bool, DomainError> {
    Ok(players_adapter::find_by_display_name(conn, display_name)
        .await?
        .is_some())
}
