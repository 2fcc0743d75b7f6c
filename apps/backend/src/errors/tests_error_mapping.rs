// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_move_validation_to_422() {
    let de = DomainError::validation(ValidationKind::OutOfBounds, "row 3 outside 0..3");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::OutOfBounds);
    assert_eq!(app.status().as_u16(), 422);

    let cfg = DomainError::validation(ValidationKind::InvalidBoardConfig, "k > n");
    let app: AppError = cfg.into();
    assert_eq!(app.code(), ErrorCode::InvalidBoardConfig);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_not_a_participant_to_403() {
    let de = DomainError::validation(ValidationKind::NotAParticipant, "not seated");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "NOT_A_PARTICIPANT");
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_game_conflicts_to_409() {
    let cases = [
        (ConflictKind::CellOccupied, "CELL_OCCUPIED"),
        (ConflictKind::WrongTurn, "WRONG_TURN"),
        (ConflictKind::GameAlreadyOver, "GAME_ALREADY_OVER"),
        (ConflictKind::SeatsFull, "SEATS_FULL"),
        (ConflictKind::DisplayNameTaken, "DISPLAY_NAME_TAKEN"),
        (ConflictKind::OptimisticLock, "OPTIMISTIC_LOCK"),
        (ConflictKind::Other("x".into()), "CONFLICT"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::conflict(kind, "conflict").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 409);
    }
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Player, "no player").into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad board");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn only_optimistic_lock_is_retryable() {
    assert!(DomainError::conflict(ConflictKind::OptimisticLock, "race").is_retryable());
    assert!(!DomainError::conflict(ConflictKind::WrongTurn, "turn").is_retryable());
    assert!(!DomainError::infra(InfraErrorKind::DataCorruption, "bad").is_retryable());
}

#[actix_web::test]
async fn problem_details_body_and_headers() {
    let app: AppError = DomainError::conflict(ConflictKind::WrongTurn, "seat A to move").into();
    let resp = app.error_response();
    assert_eq!(resp.status().as_u16(), 409);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );
    assert!(resp.headers().contains_key("x-trace-id"));

    let body = to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "WRONG_TURN");
    assert_eq!(json["title"], "Wrong Turn");
    assert_eq!(json["status"], 409);
    assert_eq!(json["detail"], "seat A to move");
    assert_eq!(json["type"], "https://crossline.app/errors/WRONG_TURN");
}

#[test]
fn unauthorized_sets_www_authenticate() {
    let resp = AppError::unauthorized_missing_bearer().error_response();
    assert_eq!(resp.status().as_u16(), 401);
    assert_eq!(
        resp.headers()
            .get("WWW-Authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
}

#[test]
fn bad_login_is_401_with_challenge() {
    let app: AppError =
        DomainError::validation(ValidationKind::InvalidCredentials, "wrong password").into();
    assert_eq!(app.code(), ErrorCode::InvalidCredentials);
    let resp = app.error_response();
    assert_eq!(resp.status().as_u16(), 401);
    assert!(resp.headers().contains_key("WWW-Authenticate"));

    let app: AppError = DomainError::validation(ValidationKind::InvalidPassword, "empty").into();
    assert_eq!(app.code().as_str(), "INVALID_PASSWORD");
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn unavailable_sets_retry_after() {
    let resp = AppError::db_unavailable("down").error_response();
    assert_eq!(resp.status().as_u16(), 503);
    assert!(resp.headers().contains_key("Retry-After"));
}
