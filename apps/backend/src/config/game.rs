//! Game defaults read from the environment at startup.

use std::env;
use std::str::FromStr;

use crate::domain::config::GameDefaults;
use crate::error::AppError;

const DEFAULT_BOARD_SIZE: u8 = 3;
const DEFAULT_WIN_CONDITION: u8 = 3;
const DEFAULT_MAX_BOARD_SIZE: u8 = 15;
const DEFAULT_MISCUE_PROBABILITY: f64 = 0.1;

/// Game settings the service is constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub defaults: GameDefaults,
    /// Chance that an eligible move writes the opponent's symbol
    pub miscue_probability: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            defaults: GameDefaults {
                board_size: DEFAULT_BOARD_SIZE,
                win_condition: DEFAULT_WIN_CONDITION,
                max_board_size: DEFAULT_MAX_BOARD_SIZE,
            },
            miscue_probability: DEFAULT_MISCUE_PROBABILITY,
        }
    }
}

impl GameSettings {
    /// Reads `GAME_DEFAULT_BOARD_SIZE`, `GAME_DEFAULT_WIN_CONDITION`,
    /// `GAME_MAX_BOARD_SIZE` and `GAME_MISCUE_PROBABILITY`.
    pub fn from_env() -> Result<Self, AppError> {
        let board_size = parse_var("GAME_DEFAULT_BOARD_SIZE", DEFAULT_BOARD_SIZE)?;
        let win_condition = parse_var("GAME_DEFAULT_WIN_CONDITION", DEFAULT_WIN_CONDITION)?;
        let max_board_size = parse_var("GAME_MAX_BOARD_SIZE", DEFAULT_MAX_BOARD_SIZE)?;
        let miscue_probability =
            parse_var("GAME_MISCUE_PROBABILITY", DEFAULT_MISCUE_PROBABILITY)?;

        let settings = Self {
            defaults: GameDefaults {
                board_size,
                win_condition,
                max_board_size,
            },
            miscue_probability,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let d = &self.defaults;
        if d.max_board_size == 0 {
            return Err(AppError::config("GAME_MAX_BOARD_SIZE must be at least 1"));
        }
        if d.board_size == 0 || d.board_size > d.max_board_size {
            return Err(AppError::config(format!(
                "GAME_DEFAULT_BOARD_SIZE must be in 1..={}, got {}",
                d.max_board_size, d.board_size
            )));
        }
        if d.win_condition == 0 || d.win_condition > d.board_size {
            return Err(AppError::config(format!(
                "GAME_DEFAULT_WIN_CONDITION must be in 1..={}, got {}",
                d.board_size, d.win_condition
            )));
        }
        if !(0.0..=1.0).contains(&self.miscue_probability) {
            return Err(AppError::config(format!(
                "GAME_MISCUE_PROBABILITY must be within [0, 1], got {}",
                self.miscue_probability
            )));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
