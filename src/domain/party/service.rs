use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::dto::{
    CreatePartyRequest, PartyMemberResponse, PartyResponse, UpdatePartyRequest,
};
use super::entity::party::{self, Entity as Party, PartyState};
use super::entity::party_apply::{self, Entity as PartyApply};
use super::entity::party_like::{self, Entity as PartyLike};
use super::entity::party_tag::{self, Entity as PartyTag};
use crate::domain::member::entity::member::{self, Entity as Member};
use crate::domain::party::comment_service::PartyCommentService;
use crate::event::DomainEvent;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct PartyService;

impl PartyService {
    /// 모임 생성
    pub async fn create_party(
        state: AppState,
        member_id: i64,
        req: CreatePartyRequest,
    ) -> Result<PartyResponse, AppError> {
        // 1. 주최 회원 존재 여부 확인
        let host = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 2. 트랜잭션으로 모임 + 태그 저장
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let now = Utc::now().naive_utc();
        let new_party = party::ActiveModel {
            party_name: Set(req.party_name.clone()),
            score: Set(req.score),
            start_dt: Set(req.start_dt),
            end_dt: Set(req.end_dt),
            amount: Set(req.amount),
            number_people: Set(req.number_people),
            location: Set(req.location.clone()),
            latitude: Set(req.latitude),
            longitude: Set(req.longitude),
            content: Set(req.content.clone()),
            state: Set(PartyState::Recruiting),
            member_id: Set(member_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = new_party
            .insert(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        for tag_name in &req.tags {
            let tag = party_tag::ActiveModel {
                party_id: Set(saved.party_id),
                tag_name: Set(tag_name.clone()),
                ..Default::default()
            };
            tag.insert(&txn)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(
            party_id = saved.party_id,
            member_id = member_id,
            "모임 생성 완료"
        );

        // 3. 모임 생성 이벤트 발행 (실패해도 요청 처리는 계속)
        state.events.publish(DomainEvent::PartyCreated {
            party_id: saved.party_id,
            host_member_id: member_id,
            tag_names: req.tags.clone(),
        });

        Ok(PartyResponse::assemble(
            saved,
            req.tags,
            host.nickname,
            host.manner_point,
            true,
            false,
            vec![],
            vec![],
        ))
    }

    /// 모임 상세 조회
    ///
    /// 댓글(작성자 여부 포함), 관심 등록 여부, 참여 확정 회원,
    /// 주최자 정보를 모아 하나의 응답으로 조립합니다.
    pub async fn get_party(
        state: AppState,
        member_id: i64,
        party_id: i64,
    ) -> Result<PartyResponse, AppError> {
        // 1. 모임 조회
        let party = Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        // 2. 조회 회원 (댓글 작성자 여부 판별용)
        let viewer = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        Self::assemble_response(&state, party, &viewer).await
    }

    /// 모임 수정 (주최자만)
    pub async fn update_party(
        state: AppState,
        member_id: i64,
        party_id: i64,
        req: UpdatePartyRequest,
    ) -> Result<PartyResponse, AppError> {
        // 1. 모임 조회 및 주최자 확인
        let party = Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        if party.member_id != member_id {
            return Err(AppError::PartyNotHost(
                "모임 주최자가 아닙니다.".to_string(),
            ));
        }

        // 2. 트랜잭션으로 본문 수정 + 태그 교체
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let mut active: party::ActiveModel = party.into();
        if let Some(party_name) = req.party_name {
            active.party_name = Set(party_name);
        }
        if let Some(score) = req.score {
            active.score = Set(score);
        }
        if let Some(start_dt) = req.start_dt {
            active.start_dt = Set(start_dt);
        }
        if let Some(end_dt) = req.end_dt {
            active.end_dt = Set(end_dt);
        }
        if let Some(amount) = req.amount {
            active.amount = Set(amount);
        }
        if let Some(number_people) = req.number_people {
            active.number_people = Set(number_people);
        }
        if let Some(location) = req.location {
            active.location = Set(location);
        }
        if let Some(latitude) = req.latitude {
            active.latitude = Set(latitude);
        }
        if let Some(longitude) = req.longitude {
            active.longitude = Set(longitude);
        }
        if let Some(content) = req.content {
            active.content = Set(content);
        }
        if let Some(party_state) = req.state {
            active.state = Set(party_state);
        }
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        // 태그는 전체 교체
        if let Some(tags) = req.tags {
            PartyTag::delete_many()
                .filter(party_tag::Column::PartyId.eq(party_id))
                .exec(&txn)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

            for tag_name in tags {
                let tag = party_tag::ActiveModel {
                    party_id: Set(party_id),
                    tag_name: Set(tag_name),
                    ..Default::default()
                };
                tag.insert(&txn)
                    .await
                    .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(party_id = party_id, "모임 수정 완료");

        let viewer = Member::find_by_id(member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        Self::assemble_response(&state, updated, &viewer).await
    }

    /// 모임 삭제 (주최자만)
    ///
    /// 댓글 → 태그 → 가입 신청 → 관심 등록 → 모임 순서로
    /// 하나의 트랜잭션 안에서 삭제합니다.
    pub async fn delete_party(
        state: AppState,
        member_id: i64,
        party_id: i64,
    ) -> Result<(), AppError> {
        // 1. 모임 조회 및 주최자 확인
        let party = Party::find_by_id(party_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::PartyNotFound("모임을 찾을 수 없습니다.".to_string()))?;

        if party.member_id != member_id {
            return Err(AppError::PartyNotHost(
                "모임 주최자가 아닙니다.".to_string(),
            ));
        }

        // 2. 자식 레코드부터 순서대로 삭제
        let txn = state
            .db
            .begin()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        PartyCommentService::delete_all(&txn, party_id).await?;

        PartyTag::delete_many()
            .filter(party_tag::Column::PartyId.eq(party_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        PartyApply::delete_many()
            .filter(party_apply::Column::PartyId.eq(party_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        PartyLike::delete_many()
            .filter(party_like::Column::PartyId.eq(party_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        Party::delete_by_id(party_id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(party_id = party_id, member_id = member_id, "모임 삭제 완료");

        Ok(())
    }

    /// 모임 상세 응답 조립
    async fn assemble_response(
        state: &AppState,
        party: party::Model,
        viewer: &member::Model,
    ) -> Result<PartyResponse, AppError> {
        let party_id = party.party_id;

        // 1. 태그
        let tags = PartyTag::find()
            .filter(party_tag::Column::PartyId.eq(party_id))
            .order_by_asc(party_tag::Column::PartyTagId)
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .into_iter()
            .map(|t| t.tag_name)
            .collect();

        // 2. 주최자 정보
        let host = Member::find_by_id(party.member_id)
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| AppError::MemberNotFound("회원을 찾을 수 없습니다.".to_string()))?;

        // 3. 댓글 (조회 회원 작성 여부 포함)
        let comments =
            PartyCommentService::get_all(state, party_id, &viewer.nickname).await?;

        // 4. 관심 등록 여부
        let is_liked = PartyLike::find()
            .filter(party_like::Column::PartyId.eq(party_id))
            .filter(party_like::Column::MemberId.eq(viewer.member_id))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .is_some();

        // 5. 참여 확정 회원 (수락된 가입 신청)
        let accepted_ids: Vec<i64> = PartyApply::find()
            .filter(party_apply::Column::PartyId.eq(party_id))
            .filter(party_apply::Column::IsAccept.eq(true))
            .all(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .into_iter()
            .map(|a| a.target_member_id)
            .collect();

        let members = if accepted_ids.is_empty() {
            vec![]
        } else {
            Member::find()
                .filter(member::Column::MemberId.is_in(accepted_ids))
                .all(&state.db)
                .await
                .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
                .into_iter()
                .map(|m| PartyMemberResponse {
                    member_id: m.member_id,
                    nickname: m.nickname,
                })
                .collect()
        };

        let is_owner = party.member_id == viewer.member_id;

        Ok(PartyResponse::assemble(
            party,
            tags,
            host.nickname,
            host.manner_point,
            is_owner,
            is_liked,
            comments,
            members,
        ))
    }
}
