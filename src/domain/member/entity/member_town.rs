use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 회원-동네 연관 (회원별 별칭 + 좌표)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member_town")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub member_town_id: i64,
    pub member_id: i64,
    pub town_id: i64,
    /// 회원이 붙인 동네 별칭 (예: "우리집")
    pub town_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::MemberId"
    )]
    Member,
    #[sea_orm(
        belongs_to = "crate::domain::town::entity::town::Entity",
        from = "Column::TownId",
        to = "crate::domain::town::entity::town::Column::TownId"
    )]
    Town,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<crate::domain::town::entity::town::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Town.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
