//! The game aggregate and its seat/status vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::board::{Board, Symbol};

pub type PlayerId = Uuid;
pub type GameId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// Canonical mark for this seat.
    pub fn symbol(self) -> Symbol {
        match self {
            Seat::A => Symbol::X,
            Seat::B => Symbol::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    XWin,
    OWin,
    /// Drawn on a full board, or forfeited
    Finished,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }

    pub fn win_for(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => GameStatus::XWin,
            Symbol::O => GameStatus::OWin,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Active => "Active",
            GameStatus::XWin => "XWin",
            GameStatus::OWin => "OWin",
            GameStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game, passed by value through every operation. `version` is the
/// optimistic-concurrency token of the persisted row this value was read
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub board_size: u8,
    pub win_condition: u8,
    pub board: Board,
    pub seat_a: PlayerId,
    pub seat_b: Option<PlayerId>,
    pub turn: Seat,
    pub status: GameStatus,
    pub version: i32,
}

impl Game {
    /// Fresh game: creator in seat A, seat B open, empty board, A to move.
    pub fn new(id: GameId, board_size: u8, win_condition: u8, creator: PlayerId) -> Self {
        Self {
            id,
            board_size,
            win_condition,
            board: Board::empty(board_size as usize),
            seat_a: creator,
            seat_b: None,
            turn: Seat::A,
            status: GameStatus::Active,
            version: 1,
        }
    }

    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        if self.seat_a == player {
            Some(Seat::A)
        } else if self.seat_b == Some(player) {
            Some(Seat::B)
        } else {
            None
        }
    }

    pub fn player_at(&self, seat: Seat) -> Option<PlayerId> {
        match seat {
            Seat::A => Some(self.seat_a),
            Seat::B => self.seat_b,
        }
    }

    pub fn is_participant(&self, player: PlayerId) -> bool {
        self.seat_of(player).is_some()
    }
}
