//! SeaORM adapter for player repository - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::players;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    display_name: &str,
    password_hash: &str,
) -> Result<players::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    players::ActiveModel {
        id: Set(id),
        display_name: Set(display_name.to_string()),
        password_hash: Set(password_hash.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: Uuid,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

/// Exact, case-sensitive match on the unique display name.
pub async fn find_by_display_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    display_name: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::DisplayName.eq(display_name))
        .one(conn)
        .await
}
