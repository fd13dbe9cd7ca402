use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::dto::{PartyApplyListResponse, PartyApplyResponse};
use super::entity::party::Entity as Party;
use super::entity::party_apply::{self, Entity as PartyApply};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::page::PageQuery;

pub struct PartyApplyService;

impl PartyApplyService {
    /// 모임 가입 신청
    pub async fn apply(
        state: AppState,
        member_id: i64,
        party_id: i64,
    ) -> Result<PartyApplyResponse, AppError> {
        // 1. 모임 존재 여부 확인
        Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        // 2. 중복 신청 확인
        let existing = PartyApply::find()
            .filter(party_apply::Column::PartyId.eq(party_id))
            .filter(party_apply::Column::TargetMemberId.eq(member_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if existing.is_some() {
            return Err(AppError::PartyApplyDuplicate(
                "이미 가입 신청한 모임입니다.".to_string(),
            ));
        }

        // 3. 신청 생성 (수락 전 상태)
        let new_apply = party_apply::ActiveModel {
            party_id: Set(party_id),
            target_member_id: Set(member_id),
            is_accept: Set(false),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let saved = new_apply
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            party_id = party_id,
            member_id = member_id,
            "모임 가입 신청 완료"
        );

        Ok(PartyApplyResponse::from(saved))
    }

    /// 모임 가입 신청 목록 조회 (페이지네이션)
    pub async fn get_applies(
        state: AppState,
        party_id: i64,
        query: PageQuery,
    ) -> Result<PartyApplyListResponse, AppError> {
        // 1. 모임 존재 여부 확인
        Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        // 2. 페이지 단위 조회
        let page = query.page();
        let size = query.size();

        let paginator = PartyApply::find()
            .filter(party_apply::Column::PartyId.eq(party_id))
            .order_by_asc(party_apply::Column::PartyApplyId)
            .paginate(&state.db, size);

        let total_elements = paginator
            .num_items()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
        let total_pages = paginator
            .num_pages()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let content = paginator
            .fetch_page(page)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .into_iter()
            .map(PartyApplyResponse::from)
            .collect();

        Ok(PartyApplyListResponse {
            content,
            page,
            size,
            total_elements,
            total_pages,
        })
    }

    /// 가입 신청 수락 (주최자만)
    pub async fn accept(
        state: AppState,
        member_id: i64,
        party_id: i64,
        target_member_id: i64,
    ) -> Result<PartyApplyResponse, AppError> {
        // 1. 모임 조회 및 주최자 확인
        let party = Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        if party.member_id != member_id {
            return Err(AppError::PartyNotHost(
                "모임 주최자만 수락할 수 있습니다.".to_string(),
            ));
        }

        // 2. 신청 존재 여부 확인
        let apply = PartyApply::find()
            .filter(party_apply::Column::PartyId.eq(party_id))
            .filter(party_apply::Column::TargetMemberId.eq(target_member_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::PartyApplyNotFound("가입 신청을 찾을 수 없습니다.".to_string())
            })?;

        // 3. 수락 처리
        let mut active: party_apply::ActiveModel = apply.into();
        active.is_accept = Set(true);

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            party_id = party_id,
            target_member_id = target_member_id,
            "모임 가입 신청 수락"
        );

        Ok(PartyApplyResponse::from(updated))
    }
}
