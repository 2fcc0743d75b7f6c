//! K-in-a-row detection over an N×N board.

use super::board::{Board, Symbol};

/// Horizontal, vertical, main diagonal, anti-diagonal.
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// True when `symbol` has a contiguous run of at least `win_condition`
/// cells in any of the four line directions.
///
/// Every occupied cell is tried as a run start and the run is counted
/// forward only; the backward half of a run is covered by starting from its
/// other end.
pub fn has_win(board: &Board, symbol: Symbol, win_condition: usize) -> bool {
    if win_condition == 0 {
        return false;
    }
    let n = board.size();
    for row in 0..n {
        for col in 0..n {
            if board.get(row, col) != Some(symbol) {
                continue;
            }
            if DIRECTIONS.iter().any(|&(dr, dc)| {
                run_length(board, symbol, row, col, dr, dc, win_condition) >= win_condition
            }) {
                return true;
            }
        }
    }
    false
}

/// Length of the run of `symbol` starting at `(row, col)`, capped at `cap`.
fn run_length(
    board: &Board,
    symbol: Symbol,
    row: usize,
    col: usize,
    dr: i64,
    dc: i64,
    cap: usize,
) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row as i64, col as i64);
    while count < cap && board.in_bounds(r, c) && board.get(r as usize, c as usize) == Some(symbol)
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
