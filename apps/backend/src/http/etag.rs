//! Game ETags: `"game-{uuid}-v{version}"`.
//!
//! Responses carrying a game view send its ETag; `POST .../moves` accepts it
//! back in `If-Match` as the expected version.

use actix_web::http::header::{self, HeaderMap};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub fn game_etag(id: Uuid, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}

/// Parse a game ETag into `(id, version)`. Surrounding quotes are optional.
pub fn parse_game_etag(raw: &str) -> Result<(Uuid, i32), AppError> {
    let invalid = || {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!(r#"Invalid ETag: expected "game-{{id}}-v{{version}}", got {raw}"#),
        )
    };

    let s = raw.trim();
    let s = s
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s);
    let rest = s.strip_prefix("game-").ok_or_else(invalid)?;
    let (id, version) = rest.rsplit_once("-v").ok_or_else(invalid)?;

    let id = Uuid::parse_str(id).map_err(|_| invalid())?;
    let version = version.parse::<i32>().map_err(|_| invalid())?;
    Ok((id, version))
}

/// Expected version from `If-Match`, if the client sent one.
///
/// `*` means "any version". An ETag naming a different game is rejected
/// like a malformed one.
pub fn if_match_version(headers: &HeaderMap, game_id: Uuid) -> Result<Option<i32>, AppError> {
    let Some(value) = headers.get(header::IF_MATCH) else {
        return Ok(None);
    };
    let raw = value.to_str().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidHeader, "If-Match is not valid ASCII")
    })?;
    if raw.trim() == "*" {
        return Ok(None);
    }

    let (id, version) = parse_game_etag(raw)?;
    if id != game_id {
        return Err(AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("If-Match names game {id}, not {game_id}"),
        ));
    }
    Ok(Some(version))
}
