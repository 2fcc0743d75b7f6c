//! Application services: orchestrate domain functions over the stores.

pub mod games;
pub mod players;

pub use games::GameService;
pub use players::PlayerService;
