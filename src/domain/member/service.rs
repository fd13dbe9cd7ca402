use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use tracing::info;

use super::dto::{MemberInfoResponse, UpdateMemberInfoRequest, UpdatePasswordRequest};
use super::entity::member::{self, Entity as Member};
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct MemberService;

impl MemberService {
    /// 내 정보 조회
    pub async fn get_my_info(
        state: AppState,
        member_id: i64,
    ) -> Result<MemberInfoResponse, AppError> {
        let member = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        Ok(MemberInfoResponse::from(member))
    }

    /// 회원 정보 수정 (닉네임)
    pub async fn update_my_info(
        state: AppState,
        member_id: i64,
        req: UpdateMemberInfoRequest,
    ) -> Result<MemberInfoResponse, AppError> {
        // 1. 수정할 값이 있는지 확인
        let nickname = match req.nickname.filter(|n| !n.trim().is_empty()) {
            Some(nickname) => nickname,
            None => {
                return Err(AppError::MemberValidNot(
                    "변경할 회원 정보가 없습니다.".to_string(),
                ))
            }
        };

        // 2. 회원 존재 여부 확인
        let member = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 3. 닉네임만 변경
        let mut active: member::ActiveModel = member.into();
        active.nickname = Set(nickname);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(member_id = updated.member_id, "회원 정보 수정 완료");

        Ok(MemberInfoResponse::from(updated))
    }

    /// 비밀번호 변경
    pub async fn update_password(
        state: AppState,
        member_id: i64,
        req: UpdatePasswordRequest,
    ) -> Result<(), AppError> {
        // 1. 변경할 비밀번호 확인
        let password = match req.password.filter(|p| !p.trim().is_empty()) {
            Some(password) => password,
            None => {
                return Err(AppError::MemberValidNot(
                    "변경할 비밀번호가 없습니다.".to_string(),
                ))
            }
        };

        // 2. 회원 존재 여부 확인
        let member = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 3. 암호화 후 저장
        let encoded_password = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("비밀번호 암호화 실패: {}", e)))?;

        let mut active: member::ActiveModel = member.into();
        active.encoded_password = Set(encoded_password);
        active.updated_at = Set(Utc::now().naive_utc());

        active
            .update(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(member_id = member_id, "비밀번호 변경 완료");

        Ok(())
    }
}
