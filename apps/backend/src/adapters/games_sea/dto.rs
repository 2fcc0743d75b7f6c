//! DTOs for games_sea adapter.

use uuid::Uuid;

use crate::entities::games::{GameStatus, TurnSeat};

/// DTO for inserting a new game row.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: Uuid,
    pub board_size: i16,
    pub win_condition: i16,
    pub board_state: Option<String>,
    pub seat_a: Uuid,
}

impl GameCreate {
    pub fn new(id: Uuid, board_size: i16, win_condition: i16, seat_a: Uuid) -> Self {
        Self {
            id,
            board_size,
            win_condition,
            board_state: None,
            seat_a,
        }
    }

    pub fn with_board_state(mut self, board_state: impl Into<String>) -> Self {
        self.board_state = Some(board_state.into());
        self
    }
}

/// Unified DTO for updating the mutable game columns with optimistic locking.
///
/// Any combination of fields can be set; all are written atomically with a
/// single version increment. `expected_version` must match the stored
/// version or the update is rejected.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: Uuid,
    pub board_state: Option<String>,
    pub seat_b: Option<Uuid>,
    pub turn: Option<TurnSeat>,
    pub status: Option<GameStatus>,
    pub expected_version: i32,
}

impl GameUpdate {
    pub fn new(id: Uuid, expected_version: i32) -> Self {
        Self {
            id,
            board_state: None,
            seat_b: None,
            turn: None,
            status: None,
            expected_version,
        }
    }

    pub fn with_board_state(mut self, board_state: impl Into<String>) -> Self {
        self.board_state = Some(board_state.into());
        self
    }

    pub fn with_seat_b(mut self, seat_b: Uuid) -> Self {
        self.seat_b = Some(seat_b);
        self
    }

    pub fn with_turn(mut self, turn: TurnSeat) -> Self {
        self.turn = Some(turn);
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }
}
