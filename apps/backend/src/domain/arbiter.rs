//! Move legality and the Active → terminal transition.

use tracing::debug;

use super::board::Symbol;
use super::game::{Game, GameStatus, PlayerId};
use super::miscue::{resolve_symbol, MiscueSource};
use super::win::has_win;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Result of a legal move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub game: Game,
    /// Symbol actually written to the board
    pub written: Symbol,
    /// True when the written symbol is not the mover's own
    pub miscued: bool,
}

/// Validates and applies one move.
///
/// Checks run in a fixed order and the first failure wins: bounds, cell
/// occupancy, turn ownership, then game status. The returned game keeps the
/// loaded `version`; persisting it is the caller's job.
pub fn apply_move(
    mut game: Game,
    row: i64,
    col: i64,
    player: PlayerId,
    miscue: &dyn MiscueSource,
) -> Result<MoveOutcome, DomainError> {
    if !game.board.in_bounds(row, col) {
        return Err(DomainError::validation(
            ValidationKind::OutOfBounds,
            format!(
                "Cell ({row}, {col}) is outside the {n}x{n} board",
                n = game.board_size
            ),
        ));
    }
    let (r, c) = (row as usize, col as usize);

    if let Some(existing) = game.board.get(r, c) {
        return Err(DomainError::conflict(
            ConflictKind::CellOccupied,
            format!("Cell ({row}, {col}) already holds {}", existing.as_str()),
        ));
    }

    if game.player_at(game.turn) != Some(player) {
        return Err(DomainError::conflict(
            ConflictKind::WrongTurn,
            format!("It is seat {:?}'s turn", game.turn),
        ));
    }

    if game.status.is_terminal() {
        return Err(DomainError::conflict(
            ConflictKind::GameAlreadyOver,
            format!("Game is already {}", game.status),
        ));
    }

    let intended = game.turn.symbol();
    let move_index = game.board.filled_count() + 1;
    let written = resolve_symbol(intended, move_index, miscue);
    let miscued = written != intended;
    if miscued {
        debug!(game_id = %game.id, move_index, intended = intended.as_str(), written = written.as_str(), "Miscue fired");
    }

    game.board.set(r, c, written);

    if has_win(&game.board, written, game.win_condition as usize) {
        game.status = GameStatus::win_for(written);
    } else if game.board.is_full() {
        game.status = GameStatus::Finished;
    } else {
        game.turn = game.turn.other();
    }

    Ok(MoveOutcome {
        game,
        written,
        miscued,
    })
}
