use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GameStatus {
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "X_WIN")]
    XWin,
    #[sea_orm(string_value = "O_WIN")]
    OWin,
    #[sea_orm(string_value = "FINISHED")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum TurnSeat {
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B")]
    B,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "board_size", column_type = "SmallInteger")]
    pub board_size: i16,
    #[sea_orm(column_name = "win_condition", column_type = "SmallInteger")]
    pub win_condition: i16,
    #[sea_orm(column_name = "board_state", column_type = "Text", nullable)]
    pub board_state: Option<String>,
    #[sea_orm(column_name = "seat_a")]
    pub seat_a: Uuid,
    #[sea_orm(column_name = "seat_b")]
    pub seat_b: Option<Uuid>,
    pub turn: TurnSeat,
    pub status: GameStatus,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "version")]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::SeatA",
        to = "super::players::Column::Id"
    )]
    SeatAPlayer,
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::SeatB",
        to = "super::players::Column::Id"
    )]
    SeatBPlayer,
}

impl ActiveModelBehavior for ActiveModel {}
