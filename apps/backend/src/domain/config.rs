//! Board configuration requested at game creation.

use crate::errors::domain::{DomainError, ValidationKind};

/// Fallbacks and limits applied when a client creates a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDefaults {
    pub board_size: u8,
    pub win_condition: u8,
    pub max_board_size: u8,
}

/// Validated board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: u8,
    pub win_condition: u8,
}

impl GameConfig {
    /// Fills omitted values from `defaults`, then requires
    /// `1 <= board_size <= max_board_size` and `1 <= win_condition <= board_size`.
    pub fn resolve(
        board_size: Option<i64>,
        win_condition: Option<i64>,
        defaults: &GameDefaults,
    ) -> Result<Self, DomainError> {
        let size = board_size.unwrap_or(i64::from(defaults.board_size));
        let k = win_condition.unwrap_or(i64::from(defaults.win_condition));

        if size < 1 || size > i64::from(defaults.max_board_size) {
            return Err(DomainError::validation(
                ValidationKind::InvalidBoardConfig,
                format!(
                    "boardSize must be between 1 and {}, got {size}",
                    defaults.max_board_size
                ),
            ));
        }
        if k < 1 || k > size {
            return Err(DomainError::validation(
                ValidationKind::InvalidBoardConfig,
                format!("winCondition must be between 1 and {size}, got {k}"),
            ));
        }

        Ok(Self {
            board_size: size as u8,
            win_condition: k as u8,
        })
    }
}
