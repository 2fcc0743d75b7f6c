use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{GameStatus, Symbol};

/// Client-facing rendition of a game.
///
/// Seats are reported by display name; an id with no known player renders
/// as an empty string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: Uuid,
    pub board_size: u8,
    pub board: Vec<Vec<Option<Symbol>>>,
    pub player1_name: String,
    pub player2_name: String,
    pub current_turn_player_name: String,
    pub status: GameStatus,
    /// Carried to the HTTP layer for the ETag; not part of the body
    #[serde(skip)]
    pub version: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub board_size: Option<i64>,
    pub win_condition: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MakeMoveRequest {
    pub row: i64,
    pub column: i64,
}
