use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 모임 진행 상태
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PartyState {
    #[sea_orm(string_value = "RECRUITING")]
    Recruiting,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub party_id: i64,
    pub party_name: String,
    pub score: i32,
    pub start_dt: Date,
    pub end_dt: Date,
    pub amount: i32,
    pub number_people: i32,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub state: PartyState,
    /// 주최 회원
    pub member_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::member::entity::member::Entity",
        from = "Column::MemberId",
        to = "crate::domain::member::entity::member::Column::MemberId"
    )]
    Member,
    #[sea_orm(has_many = "super::party_tag::Entity")]
    PartyTag,
    #[sea_orm(has_many = "super::party_apply::Entity")]
    PartyApply,
    #[sea_orm(has_many = "super::party_comment::Entity")]
    PartyComment,
    #[sea_orm(has_many = "super::party_like::Entity")]
    PartyLike,
}

impl Related<crate::domain::member::entity::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::party_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyTag.def()
    }
}

impl Related<super::party_apply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyApply.def()
    }
}

impl Related<super::party_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyComment.def()
    }
}

impl Related<super::party_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyLike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
