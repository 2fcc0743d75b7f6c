//! Repository layer: domain-facing persistence over the SeaORM adapters.

pub mod games;
pub mod players;
