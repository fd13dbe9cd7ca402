use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use super::dto::{CreatePartyCommentRequest, PartyCommentResponse};
use super::entity::party::Entity as Party;
use super::entity::party_comment::{self, Entity as PartyComment};
use crate::domain::member::entity::member::Entity as Member;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct PartyCommentService;

impl PartyCommentService {
    /// 모임 댓글 작성
    ///
    /// 댓글에는 작성 시점의 닉네임이 저장됩니다.
    pub async fn create(
        state: AppState,
        member_id: i64,
        party_id: i64,
        req: CreatePartyCommentRequest,
    ) -> Result<PartyCommentResponse, AppError> {
        // 1. 모임 존재 여부 확인
        Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        // 2. 작성 회원 조회
        let member = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 3. 댓글 저장
        let new_comment = party_comment::ActiveModel {
            party_id: Set(party_id),
            nickname: Set(member.nickname.clone()),
            contents: Set(req.contents),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let saved = new_comment
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            party_id = party_id,
            party_comment_id = saved.party_comment_id,
            "모임 댓글 작성 완료"
        );

        Ok(PartyCommentResponse {
            party_comment_id: saved.party_comment_id,
            nickname: saved.nickname,
            contents: saved.contents,
            is_owner: true,
            created_at: saved.created_at,
        })
    }

    /// 모임 댓글 삭제 (작성자 본인만)
    pub async fn delete(
        state: AppState,
        member_id: i64,
        party_comment_id: i64,
    ) -> Result<(), AppError> {
        // 1. 댓글 조회
        let comment = PartyComment::find_by_id(party_comment_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::PartyCommentNotFound("댓글을 찾을 수 없습니다.".to_string())
            })?;

        // 2. 작성자 확인 (댓글은 닉네임으로 기록되므로 회원 닉네임과 비교)
        let member = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        if comment.nickname != member.nickname {
            return Err(AppError::Forbidden(
                "본인이 작성한 댓글만 삭제할 수 있습니다.".to_string(),
            ));
        }

        // 3. 삭제
        comment
            .delete(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(party_comment_id = party_comment_id, "모임 댓글 삭제 완료");

        Ok(())
    }

    /// 모임 댓글 전체 조회 (모임 상세 응답 조립에 사용)
    pub async fn get_all(
        state: &AppState,
        party_id: i64,
        viewer_nickname: &str,
    ) -> Result<Vec<PartyCommentResponse>, AppError> {
        let comments = PartyComment::find()
            .filter(party_comment::Column::PartyId.eq(party_id))
            .order_by_asc(party_comment::Column::PartyCommentId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(comments
            .into_iter()
            .map(|c| PartyCommentResponse {
                is_owner: c.nickname == viewer_nickname,
                party_comment_id: c.party_comment_id,
                nickname: c.nickname,
                contents: c.contents,
                created_at: c.created_at,
            })
            .collect())
    }

    /// 모임 댓글 전체 삭제 (모임 삭제 트랜잭션에서 사용)
    pub async fn delete_all<C: ConnectionTrait>(db: &C, party_id: i64) -> Result<u64, AppError> {
        let result = PartyComment::delete_many()
            .filter(party_comment::Column::PartyId.eq(party_id))
            .exec(db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(result.rows_affected)
    }
}
