//! `/api/games` handlers. Every handler runs its service call inside one
//! transaction and renders `GameView`s with their ETag.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentPlayer, GameIdPath, ValidatedJson};
use crate::http::etag::{game_etag, if_match_version};
use crate::protocol::{CreateGameRequest, GameView, MakeMoveRequest};
use crate::repos::games::SeaGameStore;
use crate::state::app_state::AppState;

fn with_etag(mut builder: HttpResponseBuilder, view: &GameView) -> HttpResponse {
    builder
        .insert_header((header::ETAG, game_etag(view.id, view.version)))
        .json(view)
}

async fn create_game(
    player: CurrentPlayer,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let games = app_state.games.clone();
    let req = body.into_inner();

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaGameStore::new(txn);
            games
                .create_game(&store, req, player.id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let mut created = HttpResponse::Created();
    created.insert_header((header::LOCATION, format!("/api/games/{}", view.id)));
    Ok(with_etag(created, &view))
}

async fn list_games(
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let games = app_state.games.clone();

    let views = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaGameStore::new(txn);
            games
                .list_games(&store, player.id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(views))
}

/// Read the game, joining it first when the caller is not seated.
async fn get_game(
    player: CurrentPlayer,
    game_id: GameIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let games = app_state.games.clone();
    let GameIdPath(id) = game_id;

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaGameStore::new(txn);
            games
                .get_or_join(&store, id, player.id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(with_etag(HttpResponse::Ok(), &view))
}

async fn make_move(
    http_req: HttpRequest,
    player: CurrentPlayer,
    game_id: GameIdPath,
    body: ValidatedJson<MakeMoveRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let GameIdPath(id) = game_id;
    let expected_version = if_match_version(http_req.headers(), id)?;
    let games = app_state.games.clone();
    let mv = body.into_inner();

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaGameStore::new(txn);
            games
                .make_move(&store, id, mv, player.id, expected_version)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(with_etag(HttpResponse::Ok(), &view))
}

async fn finish_game(
    player: CurrentPlayer,
    game_id: GameIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let games = app_state.games.clone();
    let GameIdPath(id) = game_id;

    with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaGameStore::new(txn);
            games
                .finish_game(&store, id, player.id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/create", web::post().to(create_game))
        .route("/list", web::get().to(list_games))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}/moves", web::post().to(make_move))
        .route("/{game_id}/finish", web::put().to(finish_game));
}
