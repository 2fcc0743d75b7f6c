mod game_flow;
mod players;
