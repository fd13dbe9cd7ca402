use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 모임 가입 신청
///
/// 수락 여부(`is_accept`)는 모임 주최자만 변경할 수 있습니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party_apply")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub party_apply_id: i64,
    pub party_id: i64,
    pub target_member_id: i64,
    pub is_accept: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::PartyId"
    )]
    Party,
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
