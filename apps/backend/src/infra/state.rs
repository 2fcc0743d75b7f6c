use std::sync::Arc;

use tracing::info;

use crate::config::db::{DbKind, DbProfile};
use crate::config::game::GameSettings;
use crate::domain::{MiscueSource, RandomMiscue};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::GameService;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builds `AppState` for the binary and for tests alike.
pub struct StateBuilder {
    security_config: SecurityConfig,
    db: Option<(DbKind, DbProfile)>,
    game_settings: GameSettings,
    miscue: Option<Arc<dyn MiscueSource>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db: None,
            game_settings: GameSettings::default(),
            miscue: None,
        }
    }

    /// Connect and migrate the given database during `build`.
    pub fn with_db(mut self, kind: DbKind, profile: DbProfile) -> Self {
        self.db = Some((kind, profile));
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_game_settings(mut self, settings: GameSettings) -> Self {
        self.game_settings = settings;
        self
    }

    /// Replaces the random miscue source built from the settings.
    pub fn with_miscue(mut self, miscue: Arc<dyn MiscueSource>) -> Self {
        self.miscue = Some(miscue);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        self.game_settings.validate()?;

        let miscue = self.miscue.unwrap_or_else(|| {
            Arc::new(RandomMiscue::new(self.game_settings.miscue_probability, None))
        });
        let games = GameService::new(self.game_settings.defaults, miscue);

        match self.db {
            Some((kind, profile)) => {
                let conn = bootstrap_db(kind, profile).await?;
                info!(db_kind = ?kind, "state=ready");
                Ok(AppState::new(conn, self.security_config, games))
            }
            None => Ok(AppState::new_without_db(self.security_config, games)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
