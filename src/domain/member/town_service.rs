use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use super::dto::{AddMemberTownRequest, MemberTownResponse};
use super::entity::member::Entity as Member;
use super::entity::member_town::{self, Entity as MemberTown};
use crate::domain::town::entity::town::Entity as Town;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 회원당 등록 가능한 동네 수 상한
pub const MAX_MEMBER_TOWN_COUNT: u64 = 2;

pub struct MemberTownService;

impl MemberTownService {
    /// 회원 동네 추가
    pub async fn add_town(
        state: AppState,
        member_id: i64,
        req: AddMemberTownRequest,
    ) -> Result<MemberTownResponse, AppError> {
        // 1. 회원 존재 여부 확인
        let member = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 2. 동네 존재 여부 확인
        let town = Town::find_by_id(req.town_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::TownNotFound("동네를 찾을 수 없습니다.".to_string()))?;

        // 3. 등록 상한 확인
        let count = MemberTown::find()
            .filter(member_town::Column::MemberId.eq(member_id))
            .count(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if count >= MAX_MEMBER_TOWN_COUNT {
            return Err(AppError::MemberTownAddMax(
                "등록 가능한 동네 수를 초과했습니다.".to_string(),
            ));
        }

        // 4. 동네 추가
        let new_member_town = member_town::ActiveModel {
            member_id: Set(member.member_id),
            town_id: Set(town.town_id),
            town_name: Set(req.town_name),
            latitude: Set(req.latitude),
            longitude: Set(req.longitude),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let saved = new_member_town
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            member_id = member_id,
            town_id = saved.town_id,
            "회원 동네 추가 완료"
        );

        Ok(MemberTownResponse::from(saved))
    }

    /// 회원 동네 목록 조회
    pub async fn get_towns(
        state: AppState,
        member_id: i64,
    ) -> Result<Vec<MemberTownResponse>, AppError> {
        let towns = MemberTown::find()
            .filter(member_town::Column::MemberId.eq(member_id))
            .order_by_asc(member_town::Column::MemberTownId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Ok(towns.into_iter().map(MemberTownResponse::from).collect())
    }

    /// 회원 동네 삭제 (본인 소유만)
    pub async fn remove_town(
        state: AppState,
        member_id: i64,
        member_town_id: i64,
    ) -> Result<(), AppError> {
        // 1. 본인의 동네인지 확인 (id + member 복합 조회)
        let member_town = MemberTown::find()
            .filter(member_town::Column::MemberTownId.eq(member_town_id))
            .filter(member_town::Column::MemberId.eq(member_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::TownNotFound("동네를 찾을 수 없습니다.".to_string()))?;

        // 2. 삭제
        member_town
            .delete(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            member_id = member_id,
            member_town_id = member_town_id,
            "회원 동네 삭제 완료"
        );

        Ok(())
    }
}
