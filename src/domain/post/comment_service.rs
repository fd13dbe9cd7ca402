use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;

use super::dto::{CommentResponse, CreateCommentRequest};
use super::entity::comment;
use super::entity::post::{self, Entity as Post, PostState};
use crate::domain::member::entity::member::Entity as Member;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct CommentService;

impl CommentService {
    /// 게시글 댓글 작성
    pub async fn create(
        state: AppState,
        member_id: i64,
        post_id: i64,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        // 1. 게시글 존재 여부 확인 (삭제된 글 제외)
        Post::find()
            .filter(post::Column::PostId.eq(post_id))
            .filter(post::Column::State.eq(PostState::Normal))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PostNotFound("게시글을 찾을 수 없습니다.".to_string()))?;

        // 2. 작성 회원 확인
        Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 3. 댓글 저장
        let new_comment = comment::ActiveModel {
            post_id: Set(post_id),
            member_id: Set(member_id),
            contents: Set(req.contents),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let saved = new_comment
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            post_id = post_id,
            comment_id = saved.comment_id,
            "게시글 댓글 작성 완료"
        );

        Ok(CommentResponse::from(saved))
    }
}
