use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 게시글 첨부 이미지 메타데이터
///
/// 실제 바이트는 파일 저장소에 `image_path`로 기록됩니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub post_image_id: i64,
    pub post_id: i64,
    pub size: i64,
    pub image_path: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::PostId"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
