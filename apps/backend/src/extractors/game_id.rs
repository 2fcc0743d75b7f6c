use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// `{game_id}` path segment parsed as a UUID. Existence is checked by the
/// service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameIdPath(pub Uuid);

impl FromRequest for GameIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("game_id")))
    }
}

fn parse(raw: Option<&str>) -> Result<GameIdPath, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;
    Uuid::parse_str(raw).map(GameIdPath).map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })
}
