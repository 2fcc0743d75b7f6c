//! Property tests for board persistence and move arbitration.
//!
//! Properties tested:
//! - decode(encode(board)) reproduces every cell
//! - Playing any order of legal moves never leaves a full board Active
//! - Coordinates off the board are OutOfBounds whatever the status
//! - No move succeeds once the game is terminal

use proptest::prelude::*;
use uuid::Uuid;

use crate::domain::board::{decode, encode};
use crate::domain::test_gens::{any_status, size_and_k, sized_board, terminal_status};
use crate::domain::{
    apply_move, has_win, test_prelude, Game, GameStatus, NeverMiscue, RandomMiscue, Symbol,
};
use crate::errors::domain::{DomainError, ValidationKind};

fn seated_game(n: usize, k: usize) -> (Game, Uuid, Uuid) {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let mut g = Game::new(Uuid::new_v4(), n as u8, k as u8, a);
    g.seat_b = Some(b);
    (g, a, b)
}

/// (n, k, a shuffled order of all cell indices)
fn play_order() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    size_and_k(6).prop_flat_map(|(n, k)| {
        let order = Just((0..n * n).collect::<Vec<_>>()).prop_shuffle();
        (Just(n), Just(k), order)
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_codec_round_trip(b in sized_board(15)) {
        let decoded = decode(Some(&encode(&b)), b.size()).unwrap();
        prop_assert_eq!(decoded, b);
    }

    #[test]
    fn prop_full_board_is_never_active((n, k, order) in play_order(), seed in any::<u64>()) {
        let (mut g, a, b) = seated_game(n, k);
        let miscue = RandomMiscue::new(0.5, Some(seed));
        for idx in order {
            if g.status.is_terminal() {
                break;
            }
            let mover = if g.turn == crate::domain::Seat::A { a } else { b };
            let out = apply_move(g, (idx / n) as i64, (idx % n) as i64, mover, &miscue).unwrap();
            g = out.game;
        }
        prop_assert!(g.status.is_terminal());
        if g.status == GameStatus::Finished {
            prop_assert!(g.board.is_full());
            prop_assert!(!has_win(&g.board, Symbol::X, k));
            prop_assert!(!has_win(&g.board, Symbol::O, k));
        }
    }

    #[test]
    fn prop_out_of_bounds_regardless_of_status(
        (n, k) in size_and_k(8),
        status in any_status(),
        offset in 0i64..5,
        axis in 0usize..4,
    ) {
        let (mut g, a, _) = seated_game(n, k);
        g.status = status;
        let n = n as i64;
        let (row, col) = match axis {
            0 => (n + offset, 0),
            1 => (0, n + offset),
            2 => (-1 - offset, 0),
            _ => (0, -1 - offset),
        };
        let err = apply_move(g, row, col, a, &NeverMiscue).unwrap_err();
        prop_assert!(matches!(err, DomainError::Validation(ValidationKind::OutOfBounds, _)));
    }

    #[test]
    fn prop_terminal_game_never_accepts_moves(
        (n, k) in size_and_k(6),
        status in terminal_status(),
        r in 0usize..6,
        c in 0usize..6,
    ) {
        let (mut g, a, b) = seated_game(n, k);
        g.status = status;
        let (r, c) = ((r % n) as i64, (c % n) as i64);
        prop_assert!(apply_move(g.clone(), r, c, a, &NeverMiscue).is_err());
        prop_assert!(apply_move(g, r, c, b, &NeverMiscue).is_err());
    }
}
