//! Game lifecycle: create, get/join, move, finish, list.
//!
//! Every operation reads the game through a `GameStore`, hands the value to
//! the pure domain functions, and writes the result back guarded by the
//! version it was read at. A lost race surfaces as
//! `Conflict(OptimisticLock)`; the service never retries on its own.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    apply_move, seats, Game, GameConfig, GameDefaults, JoinOutcome, MiscueSource, PlayerId,
};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::protocol::{CreateGameRequest, GameView, MakeMoveRequest};
use crate::repos::games::GameStore;

pub struct GameService {
    defaults: GameDefaults,
    miscue: Arc<dyn MiscueSource>,
}

impl GameService {
    pub fn new(defaults: GameDefaults, miscue: Arc<dyn MiscueSource>) -> Self {
        Self { defaults, miscue }
    }

    pub fn defaults(&self) -> &GameDefaults {
        &self.defaults
    }

    pub async fn create_game(
        &self,
        store: &dyn GameStore,
        req: CreateGameRequest,
        creator: PlayerId,
    ) -> Result<GameView, DomainError> {
        let cfg = GameConfig::resolve(req.board_size, req.win_condition, &self.defaults)?;
        let game = Game::new(Uuid::new_v4(), cfg.board_size, cfg.win_condition, creator);
        let game = store.save_new_game(&game).await?;

        info!(
            game_id = %game.id,
            board_size = game.board_size,
            win_condition = game.win_condition,
            "Game created"
        );
        self.present(store, &game).await
    }

    /// Read for seated players and finished games; otherwise seat the
    /// caller in the open seat.
    pub async fn get_or_join(
        &self,
        store: &dyn GameStore,
        game_id: Uuid,
        caller: PlayerId,
    ) -> Result<GameView, DomainError> {
        let game = store.load_game(game_id).await?;

        if game.is_participant(caller) || game.status.is_terminal() {
            return self.present(store, &game).await;
        }

        let loaded_version = game.version;
        let game = match seats::join(game, caller)? {
            JoinOutcome::AlreadySeated(g) => g,
            JoinOutcome::Joined(g) => {
                let saved = store.update_game(&g, loaded_version).await?;
                info!(game_id = %saved.id, version = saved.version, "Player joined seat B");
                saved
            }
        };
        self.present(store, &game).await
    }

    /// `expected_version` comes from an `If-Match` header when the client
    /// sent one; a stale value fails before any move validation.
    pub async fn make_move(
        &self,
        store: &dyn GameStore,
        game_id: Uuid,
        req: MakeMoveRequest,
        caller: PlayerId,
        expected_version: Option<i32>,
    ) -> Result<GameView, DomainError> {
        let game = store.load_game(game_id).await?;
        let loaded_version = game.version;

        if let Some(expected) = expected_version {
            if expected != loaded_version {
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game version mismatch: expected {expected}, but game has version {loaded_version}"
                    ),
                ));
            }
        }

        let outcome = apply_move(game, req.row, req.column, caller, self.miscue.as_ref())?;
        let saved = store.update_game(&outcome.game, loaded_version).await?;

        debug!(
            game_id = %saved.id,
            row = req.row,
            column = req.column,
            written = outcome.written.as_str(),
            miscued = outcome.miscued,
            "Move applied"
        );
        if saved.status.is_terminal() {
            info!(game_id = %saved.id, version = saved.version, status = %saved.status, "Game over");
        }
        self.present(store, &saved).await
    }

    pub async fn finish_game(
        &self,
        store: &dyn GameStore,
        game_id: Uuid,
        caller: PlayerId,
    ) -> Result<(), DomainError> {
        let game = store.load_game(game_id).await?;
        let loaded_version = game.version;
        let game = seats::finish(game, caller)?;
        let saved = store.update_game(&game, loaded_version).await?;
        info!(game_id = %saved.id, version = saved.version, "Game finished by forfeit");
        Ok(())
    }

    pub async fn list_games(
        &self,
        store: &dyn GameStore,
        caller: PlayerId,
    ) -> Result<Vec<GameView>, DomainError> {
        let games = store.list_active_games(caller).await?;
        let mut views = Vec::with_capacity(games.len());
        for game in &games {
            views.push(self.present(store, game).await?);
        }
        Ok(views)
    }

    pub async fn present(&self, store: &dyn GameStore, game: &Game) -> Result<GameView, DomainError> {
        let mut names: HashMap<PlayerId, String> = HashMap::new();
        for id in std::iter::once(game.seat_a).chain(game.seat_b) {
            if !names.contains_key(&id) {
                let name = store.resolve_player_name(id).await?.unwrap_or_default();
                names.insert(id, name);
            }
        }
        let name_of = |id: Option<PlayerId>| {
            id.and_then(|id| names.get(&id).cloned())
                .unwrap_or_default()
        };

        Ok(GameView {
            id: game.id,
            board_size: game.board_size,
            board: game.board.rows(),
            player1_name: name_of(Some(game.seat_a)),
            player2_name: name_of(game.seat_b),
            current_turn_player_name: name_of(game.player_at(game.turn)),
            status: game.status,
            version: game.version,
        })
    }
}
