use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::mint_access_token;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::players::Player;
use crate::state::app_state::AppState;

/// Body of both `/register` and `/login`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub display_name: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub player_id: Uuid,
    pub display_name: String,
    pub token: String,
}

fn issue_token(player: Player, app_state: &AppState) -> Result<AuthResponse, AppError> {
    let token = mint_access_token(
        player.id,
        &player.display_name,
        SystemTime::now(),
        &app_state.security,
    )?;
    Ok(AuthResponse {
        player_id: player.id,
        display_name: player.display_name,
        token,
    })
}

/// Create a player and hand back a bearer token for it.
async fn register(
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CredentialsRequest {
        display_name,
        password,
    } = body.into_inner();
    let players = app_state.players;

    let player = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            players
                .register(txn, &display_name, &password)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(issue_token(player, &app_state)?))
}

/// Fresh bearer token for an existing player.
async fn login(
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CredentialsRequest {
        display_name,
        password,
    } = body.into_inner();
    let players = app_state.players;

    let player = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            players
                .login(txn, &display_name, &password)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(issue_token(player, &app_state)?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
