//! Domain layer: pure game logic types and helpers.

pub mod arbiter;
pub mod board;
pub mod config;
pub mod game;
pub mod miscue;
pub mod seats;
pub mod win;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_board;
#[cfg(test)]
mod tests_props_win;
#[cfg(test)]
mod tests_scenarios;

// Re-exports for ergonomics
pub use arbiter::{apply_move, MoveOutcome};
pub use board::{Board, Symbol};
pub use config::{GameConfig, GameDefaults};
pub use game::{Game, GameId, GameStatus, PlayerId, Seat};
pub use miscue::{AlwaysMiscue, MiscueSource, NeverMiscue, RandomMiscue};
pub use seats::JoinOutcome;
pub use win::has_win;
