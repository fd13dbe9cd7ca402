use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 행정 동네 (시/구/동)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "town")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub town_id: i64,
    pub city: String,
    pub town: String,
    pub village: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::member::entity::member_town::Entity")]
    MemberTown,
}

impl Related<crate::domain::member::entity::member_town::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberTown.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
