use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::services::{GameService, PlayerService};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Absent only in tests that never touch storage
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub games: Arc<GameService>,
    pub players: PlayerService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, games: GameService) -> Self {
        Self {
            db: Some(db),
            players: PlayerService::new(security.password_hash_cost),
            security,
            games: Arc::new(games),
        }
    }

    pub fn new_without_db(security: SecurityConfig, games: GameService) -> Self {
        Self {
            db: None,
            players: PlayerService::new(security.password_hash_cost),
            security,
            games: Arc::new(games),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("security", &self.security.algorithm)
            .field("defaults", self.games.defaults())
            .finish()
    }
}
