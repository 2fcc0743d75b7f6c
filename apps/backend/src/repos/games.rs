//! Game persistence gateway.
//!
//! `GameStore` is the seam the lifecycle service talks to. `SeaGameStore`
//! implements it over any SeaORM connection or transaction; version checks
//! happen in a single guarded UPDATE so at most one writer wins per version.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use super::players;
use crate::adapters::games_sea as games_adapter;
use crate::domain::board::{self, Board};
use crate::domain::{Game, GameStatus, Seat};
use crate::entities::games;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

#[async_trait]
pub trait GameStore: Send + Sync {
    /// `NotFound(Game)` when absent.
    async fn load_game(&self, id: Uuid) -> Result<Game, DomainError>;

    /// Inserts a new game; `Conflict` on id collision.
    async fn save_new_game(&self, game: &Game) -> Result<Game, DomainError>;

    /// Writes board, seat B, turn and status if the stored version still
    /// equals `expected_version`. The returned game carries the new version.
    async fn update_game(&self, game: &Game, expected_version: i32) -> Result<Game, DomainError>;

    /// Active games oldest first, with games where `player` is seated first.
    async fn list_active_games(&self, player: Uuid) -> Result<Vec<Game>, DomainError>;

    async fn resolve_player_name(&self, player: Uuid) -> Result<Option<String>, DomainError>;
}

/// `GameStore` over a SeaORM connection or transaction.
pub struct SeaGameStore<'c, C> {
    conn: &'c C,
}

impl<'c, C> SeaGameStore<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C> GameStore for SeaGameStore<'_, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn load_game(&self, id: Uuid) -> Result<Game, DomainError> {
        let row = games_adapter::require_game(self.conn, id).await?;
        Game::try_from(row)
    }

    async fn save_new_game(&self, game: &Game) -> Result<Game, DomainError> {
        let mut dto = games_adapter::GameCreate::new(
            game.id,
            i16::from(game.board_size),
            i16::from(game.win_condition),
            game.seat_a,
        );
        if game.board.filled_count() > 0 {
            dto = dto.with_board_state(board::encode(&game.board));
        }
        let row = games_adapter::create_game(self.conn, dto)
            .await
            .map_err(|e| match DomainError::from(e) {
                DomainError::Conflict(ConflictKind::Other(_), _) => DomainError::conflict(
                    ConflictKind::Other("GameIdCollision".into()),
                    format!("Game {} already exists", game.id),
                ),
                other => other,
            })?;
        Game::try_from(row)
    }

    async fn update_game(&self, game: &Game, expected_version: i32) -> Result<Game, DomainError> {
        let mut dto = games_adapter::GameUpdate::new(game.id, expected_version)
            .with_turn(seat_to_db(game.turn))
            .with_status(status_to_db(game.status));
        if game.board.filled_count() > 0 {
            dto = dto.with_board_state(board::encode(&game.board));
        }
        if let Some(b) = game.seat_b {
            dto = dto.with_seat_b(b);
        }
        let row = games_adapter::update_game(self.conn, dto).await?;
        Game::try_from(row)
    }

    async fn list_active_games(&self, player: Uuid) -> Result<Vec<Game>, DomainError> {
        let rows = games_adapter::find_active(self.conn).await?;
        let mut games = rows
            .into_iter()
            .map(Game::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // Stable: keeps oldest-first within each group.
        games.sort_by_key(|g| !g.is_participant(player));
        Ok(games)
    }

    async fn resolve_player_name(&self, player: Uuid) -> Result<Option<String>, DomainError> {
        let found = players::find_player(self.conn, player).await?;
        Ok(found.map(|p| p.display_name))
    }
}

fn seat_to_db(seat: Seat) -> games::TurnSeat {
    match seat {
        Seat::A => games::TurnSeat::A,
        Seat::B => games::TurnSeat::B,
    }
}

fn status_to_db(status: GameStatus) -> games::GameStatus {
    match status {
        GameStatus::Active => games::GameStatus::Active,
        GameStatus::XWin => games::GameStatus::XWin,
        GameStatus::OWin => games::GameStatus::OWin,
        GameStatus::Finished => games::GameStatus::Finished,
    }
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(row: games::Model) -> Result<Self, Self::Error> {
        let board_size = u8::try_from(row.board_size)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("game {} has invalid board_size {}", row.id, row.board_size),
                )
            })?;
        let win_condition = u8::try_from(row.win_condition)
            .ok()
            .filter(|k| *k > 0 && *k <= board_size)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "game {} has invalid win_condition {}",
                        row.id, row.win_condition
                    ),
                )
            })?;
        let board: Board = board::decode(row.board_state.as_deref(), board_size as usize)?;

        Ok(Game {
            id: row.id,
            board_size,
            win_condition,
            board,
            seat_a: row.seat_a,
            seat_b: row.seat_b,
            turn: match row.turn {
                games::TurnSeat::A => Seat::A,
                games::TurnSeat::B => Seat::B,
            },
            status: match row.status {
                games::GameStatus::Active => GameStatus::Active,
                games::GameStatus::XWin => GameStatus::XWin,
                games::GameStatus::OWin => GameStatus::OWin,
                games::GameStatus::Finished => GameStatus::Finished,
            },
            version: row.version,
        })
    }
}
