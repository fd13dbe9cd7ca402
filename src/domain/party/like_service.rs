use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use tracing::info;

use super::dto::PartyLikeResponse;
use super::entity::party::Entity as Party;
use super::entity::party_like::{self, Entity as PartyLike};
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct PartyLikeService;

impl PartyLikeService {
    /// 관심 모임 토글
    ///
    /// 등록되어 있으면 해제, 없으면 등록합니다.
    pub async fn toggle(
        state: AppState,
        member_id: i64,
        party_id: i64,
    ) -> Result<PartyLikeResponse, AppError> {
        // 1. 모임 존재 여부 확인
        Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        // 2. 현재 상태 조회 후 토글
        let existing = PartyLike::find()
            .filter(party_like::Column::PartyId.eq(party_id))
            .filter(party_like::Column::MemberId.eq(member_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let is_liked = match existing {
            Some(like) => {
                like.delete(&state.db)
                    .await
                    .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
                false
            }
            None => {
                let new_like = party_like::ActiveModel {
                    party_id: Set(party_id),
                    member_id: Set(member_id),
                    ..Default::default()
                };
                new_like
                    .insert(&state.db)
                    .await
                    .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
                true
            }
        };

        info!(
            party_id = party_id,
            member_id = member_id,
            is_liked = is_liked,
            "관심 모임 토글"
        );

        Ok(PartyLikeResponse { party_id, is_liked })
    }
}
