pub mod current_player;
pub mod game_id;
pub mod validated_json;

pub use current_player::CurrentPlayer;
pub use game_id::GameIdPath;
pub use validated_json::ValidatedJson;
