//! Request and response bodies shared by services and routes.

pub mod game_view;

pub use game_view::{CreateGameRequest, GameView, MakeMoveRequest};
