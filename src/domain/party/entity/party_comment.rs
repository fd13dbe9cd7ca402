use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 모임 댓글 (모임 삭제 시 함께 삭제)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party_comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub party_comment_id: i64,
    pub party_id: i64,
    /// 작성자 닉네임
    pub nickname: String,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
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
