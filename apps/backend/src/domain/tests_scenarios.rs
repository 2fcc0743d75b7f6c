//! Scripted 3x3 games covering the documented rule scenarios.

use uuid::Uuid;

use crate::domain::{
    apply_move, AlwaysMiscue, Game, GameStatus, MiscueSource, NeverMiscue, PlayerId, Seat,
    Symbol,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

struct Table {
    game: Game,
    a: PlayerId,
    b: PlayerId,
}

impl Table {
    fn new() -> Self {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut game = Game::new(Uuid::new_v4(), 3, 3, a);
        game.seat_b = Some(b);
        Self { game, a, b }
    }

    fn play(&mut self, seat: Seat, row: i64, col: i64, miscue: &dyn MiscueSource) -> Symbol {
        let player = match seat {
            Seat::A => self.a,
            Seat::B => self.b,
        };
        let out = apply_move(self.game.clone(), row, col, player, miscue)
            .unwrap_or_else(|e| panic!("{seat:?} at ({row},{col}) failed: {e}"));
        self.game = out.game;
        out.written
    }

    fn try_play(&self, player: PlayerId, row: i64, col: i64) -> Result<Game, DomainError> {
        apply_move(self.game.clone(), row, col, player, &NeverMiscue).map(|o| o.game)
    }
}

#[test]
fn diagonal_gives_seat_a_the_win() {
    let mut t = Table::new();
    t.play(Seat::A, 0, 0, &NeverMiscue);
    t.play(Seat::B, 0, 1, &NeverMiscue);
    t.play(Seat::A, 1, 1, &NeverMiscue);
    t.play(Seat::B, 0, 2, &NeverMiscue);
    assert_eq!(t.game.status, GameStatus::Active);
    t.play(Seat::A, 2, 2, &NeverMiscue);
    assert_eq!(t.game.status, GameStatus::XWin);
}

#[test]
fn full_board_without_line_is_finished() {
    let mut t = Table::new();
    let script = [
        (Seat::A, 0, 0),
        (Seat::B, 0, 1),
        (Seat::A, 0, 2),
        (Seat::B, 1, 1),
        (Seat::A, 1, 0),
        (Seat::B, 1, 2),
        (Seat::A, 2, 1),
        (Seat::B, 2, 0),
        (Seat::A, 2, 2),
    ];
    for (i, (seat, r, c)) in script.into_iter().enumerate() {
        t.play(seat, r, c, &NeverMiscue);
        if i < script.len() - 1 {
            assert_eq!(t.game.status, GameStatus::Active, "after move {}", i + 1);
        }
    }
    assert!(t.game.board.is_full());
    assert_eq!(t.game.status, GameStatus::Finished);
}

#[test]
fn row_three_is_out_of_bounds() {
    let t = Table::new();
    let err = t.try_play(t.a, 3, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfBounds, _)
    ));
}

#[test]
fn occupied_cell_is_rejected() {
    let mut t = Table::new();
    t.play(Seat::A, 1, 1, &NeverMiscue);
    let err = t.try_play(t.b, 1, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::CellOccupied, _)
    ));
}

#[test]
fn seat_b_cannot_move_on_seat_a_turn() {
    let t = Table::new();
    let err = t.try_play(t.b, 0, 0).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::WrongTurn, _)));
}

#[test]
fn forced_miscue_swaps_symbol_but_not_rotation() {
    let mut t = Table::new();
    assert_eq!(t.play(Seat::A, 0, 0, &AlwaysMiscue), Symbol::X);
    assert_eq!(t.play(Seat::B, 1, 1, &AlwaysMiscue), Symbol::O);
    // Move index 3: seat A's mark comes out as O.
    assert_eq!(t.play(Seat::A, 2, 0, &AlwaysMiscue), Symbol::O);
    assert_eq!(t.game.turn, Seat::B);
    assert_eq!(t.play(Seat::B, 0, 1, &AlwaysMiscue), Symbol::O);
    assert_eq!(t.game.turn, Seat::A);
}

#[test]
fn miscue_can_hand_the_opponent_a_win() {
    let mut t = Table::new();
    t.play(Seat::A, 0, 0, &NeverMiscue);
    t.play(Seat::B, 1, 0, &NeverMiscue);
    t.play(Seat::A, 0, 1, &NeverMiscue);
    t.play(Seat::B, 1, 1, &NeverMiscue);
    t.play(Seat::A, 2, 2, &NeverMiscue);
    // Move index 6 by seat B: forced miscue writes X and completes A's row.
    assert_eq!(t.play(Seat::B, 0, 2, &AlwaysMiscue), Symbol::X);
    assert_eq!(t.game.status, GameStatus::XWin);
}

#[test]
fn miscue_can_spoil_the_movers_own_win() {
    let mut t = Table::new();
    t.play(Seat::A, 0, 0, &NeverMiscue);
    t.play(Seat::B, 1, 0, &NeverMiscue);
    t.play(Seat::A, 0, 1, &NeverMiscue);
    t.play(Seat::B, 1, 1, &NeverMiscue);
    t.play(Seat::A, 2, 2, &NeverMiscue);
    // Seat B would close row 1 with O; the flip writes X instead.
    assert_eq!(t.play(Seat::B, 1, 2, &AlwaysMiscue), Symbol::X);
    assert_eq!(t.game.status, GameStatus::Active);
    assert_eq!(t.game.turn, Seat::A);
}
