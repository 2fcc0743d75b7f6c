// If-Match on POST /api/games/{id}/moves:
// - matching ETag succeeds and the response ETag moves to the next version
// - stale ETag is OPTIMISTIC_LOCK even when the move itself is illegal
// - malformed or foreign ETag is INVALID_HEADER

use actix_web::http::header::{AUTHORIZATION, ETAG, IF_MATCH};
use actix_web::http::StatusCode;
use actix_web::test;
use crossline_backend::http::etag::game_etag;
use serde_json::json;
use uuid::Uuid;

use crate::common::assert_problem;
use crate::support::app_builder::create_test_app;
use crate::support::auth::bearer_header;
use crate::support::build_test_state;
use crate::support::factory::create_seated_game;

fn move_with_if_match(game_id: Uuid, bearer: &str, if_match: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/moves"))
        .insert_header((AUTHORIZATION, bearer.to_string()))
        .insert_header((IF_MATCH, if_match.to_string()))
        .set_json(json!({ "row": 0, "column": 0 }))
}

#[actix_web::test]
async fn matching_if_match_succeeds_and_bumps_etag() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, alice, _) = create_seated_game(&state).await?;
    let a = bearer_header(alice.id, "alice", &state.security);
    let app = create_test_app(state).await;

    let current = game_etag(game.id, game.version);
    let resp = test::call_service(&app, move_with_if_match(game.id, &a, &current).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ETAG).and_then(|v| v.to_str().ok()),
        Some(game_etag(game.id, game.version + 1).as_str())
    );
    Ok(())
}

#[actix_web::test]
async fn stale_if_match_is_optimistic_lock() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, _, bob) = create_seated_game(&state).await?;
    let b = bearer_header(bob.id, "bob", &state.security);
    let app = create_test_app(state).await;

    // Bob is out of turn, but the version check runs first.
    let stale = game_etag(game.id, game.version - 1);
    let resp = test::call_service(&app, move_with_if_match(game.id, &b, &stale).to_request()).await;
    assert_problem(resp, StatusCode::CONFLICT, "OPTIMISTIC_LOCK").await;
    Ok(())
}

#[actix_web::test]
async fn bad_if_match_is_invalid_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let (game, alice, _) = create_seated_game(&state).await?;
    let a = bearer_header(alice.id, "alice", &state.security);
    let app = create_test_app(state).await;

    let resp =
        test::call_service(&app, move_with_if_match(game.id, &a, "\"v2\"").to_request()).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_HEADER").await;

    let foreign = game_etag(Uuid::new_v4(), game.version);
    let resp = test::call_service(&app, move_with_if_match(game.id, &a, &foreign).to_request()).await;
    assert_problem(resp, StatusCode::BAD_REQUEST, "INVALID_HEADER").await;
    Ok(())
}
