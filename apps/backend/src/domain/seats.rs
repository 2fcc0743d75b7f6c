//! Seat assignment and forfeit.

use super::game::{Game, GameStatus, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// What `join` did.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    /// Caller already held a seat; game unchanged and nothing to persist
    AlreadySeated(Game),
    /// Caller took seat B
    Joined(Game),
}

impl JoinOutcome {
    pub fn into_game(self) -> Game {
        match self {
            JoinOutcome::AlreadySeated(g) | JoinOutcome::Joined(g) => g,
        }
    }
}

/// Seats `player` in the first open seat. Idempotent for a seated player.
///
/// Seat A is filled at creation, so only seat B can be open. Board, turn
/// and status are never touched.
pub fn join(mut game: Game, player: PlayerId) -> Result<JoinOutcome, DomainError> {
    if game.is_participant(player) {
        return Ok(JoinOutcome::AlreadySeated(game));
    }
    if game.seat_b.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::SeatsFull,
            "All seats are taken",
        ));
    }
    if game.status.is_terminal() {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyOver,
            format!("Game is already {}", game.status),
        ));
    }
    game.seat_b = Some(player);
    Ok(JoinOutcome::Joined(game))
}

/// Forfeit: a seated player ends an active game with no winner.
pub fn finish(mut game: Game, player: PlayerId) -> Result<Game, DomainError> {
    if game.status.is_terminal() {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyOver,
            format!("Game is already {}", game.status),
        ));
    }
    if !game.is_participant(player) {
        return Err(DomainError::validation(
            ValidationKind::NotAParticipant,
            "Only seated players can finish a game",
        ));
    }
    game.status = GameStatus::Finished;
    Ok(game)
}
