//! SeaORM adapter for game repository - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Apply an update guarded by the version column, then refetch.
///
/// - bumps `version` and `updated_at` alongside the caller's columns
/// - filters by id and `expected_version`
/// - on zero rows affected, tells NotFound apart from a version mismatch
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: Uuid,
    expected_version: i32,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            games::Column::Version,
            Expr::col(games::Column::Version).add(1),
        )
        .filter(games::Column::Id.eq(id))
        .filter(games::Column::Version.eq(expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let game = games::Entity::find_by_id(id).one(conn).await?;
        return match game {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                expected_version, game.version
            ))),
            None => Err(sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}"))),
        };
    }

    games::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{id}")))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or fail with a structured GAME_NOT_FOUND error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}")))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        board_size: Set(dto.board_size),
        win_condition: Set(dto.win_condition),
        board_state: Set(dto.board_state),
        seat_a: Set(dto.seat_a),
        seat_b: Set(None),
        turn: Set(games::TurnSeat::A),
        status: Set(games::GameStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        version: Set(1),
    };

    game_active.insert(conn).await
}

pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    optimistic_update_then_fetch(conn, dto.id, dto.expected_version, |mut update| {
        if let Some(board) = dto.board_state {
            update = update.col_expr(games::Column::BoardState, Expr::value(Some(board)));
        }
        if let Some(seat_b) = dto.seat_b {
            update = update.col_expr(games::Column::SeatB, Expr::value(Some(seat_b)));
        }
        if let Some(turn) = dto.turn {
            update = update.col_expr(games::Column::Turn, Expr::value(turn));
        }
        if let Some(status) = dto.status {
            update = update.col_expr(games::Column::Status, Expr::value(status));
        }
        update
    })
    .await
}

/// Active games, oldest first.
pub async fn find_active<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Status.eq(games::GameStatus::Active))
        .order_by_asc(games::Column::CreatedAt)
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}
