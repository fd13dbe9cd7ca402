use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub member_id: i64,
    pub email: String,
    /// bcrypt 인코딩된 비밀번호 (소셜 가입 시 일회용 플레이스홀더)
    pub encoded_password: String,
    pub nickname: String,
    pub manner_point: i32,
    /// 권한 문자열 (예: ROLE_USER)
    pub role: String,
    pub is_certificated: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_town::Entity")]
    MemberTown,
    #[sea_orm(has_many = "crate::domain::party::entity::party::Entity")]
    Party,
    #[sea_orm(has_many = "crate::domain::post::entity::post::Entity")]
    Post,
    #[sea_orm(has_many = "crate::domain::post::entity::comment::Entity")]
    Comment,
}

impl Related<super::member_town::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberTown.def()
    }
}

impl Related<crate::domain::party::entity::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl Related<crate::domain::post::entity::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<crate::domain::post::entity::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
