//! Error codes for the Crossline backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Crossline backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Unknown display name or wrong password
    InvalidCredentials,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Caller holds no seat in the game
    NotAParticipant,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Move coordinates outside the board
    OutOfBounds,
    /// Board size / win condition not playable
    InvalidBoardConfig,
    /// Display name empty or too long
    InvalidDisplayName,
    /// Password empty or too long
    InvalidPassword,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Game Conflicts
    CellOccupied,
    WrongTurn,
    GameAlreadyOver,
    SeatsFull,
    /// Another player already registered the display name
    DisplayNameTaken,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    Internal,
    /// Internal server error (explicit problem code)
    InternalError,
    ConfigError,
    /// Persisted game state could not be decoded
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::NotAParticipant => "NOT_A_PARTICIPANT",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::OutOfBounds => "OUT_OF_BOUNDS",
            Self::InvalidBoardConfig => "INVALID_BOARD_CONFIG",
            Self::InvalidDisplayName => "INVALID_DISPLAY_NAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::CellOccupied => "CELL_OCCUPIED",
            Self::WrongTurn => "WRONG_TURN",
            Self::GameAlreadyOver => "GAME_ALREADY_OVER",
            Self::SeatsFull => "SEATS_FULL",
            Self::DisplayNameTaken => "DISPLAY_NAME_TAKEN",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
