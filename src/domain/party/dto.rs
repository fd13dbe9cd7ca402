use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::party::{self, PartyState};
use super::entity::party_apply;

/// 모임 생성 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartyRequest {
    #[validate(length(min = 1, max = 50, message = "모임 이름은 1~50자 이내로 입력해야 합니다."))]
    pub party_name: String,

    /// 모임 점수 (목표 운동 점수 등)
    pub score: i32,

    pub start_dt: NaiveDate,
    pub end_dt: NaiveDate,

    /// 참가 비용
    pub amount: i32,

    #[validate(range(min = 1, message = "모집 인원은 1명 이상이어야 합니다."))]
    pub number_people: i32,

    #[validate(length(min = 1, message = "모임 장소는 필수입니다."))]
    pub location: String,

    pub latitude: f64,
    pub longitude: f64,

    #[validate(length(min = 1, message = "모임 내용은 필수입니다."))]
    pub content: String,

    /// 모임 태그 (1~4개)
    #[validate(length(min = 1, max = 4, message = "태그는 1~4개 지정해야 합니다."))]
    pub tags: Vec<String>,
}

/// 모임 수정 요청 DTO (부분 수정)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartyRequest {
    #[validate(length(min = 1, max = 50, message = "모임 이름은 1~50자 이내로 입력해야 합니다."))]
    pub party_name: Option<String>,
    pub score: Option<i32>,
    pub start_dt: Option<NaiveDate>,
    pub end_dt: Option<NaiveDate>,
    pub amount: Option<i32>,
    #[validate(range(min = 1, message = "모집 인원은 1명 이상이어야 합니다."))]
    pub number_people: Option<i32>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub content: Option<String>,
    pub state: Option<PartyState>,
    /// 지정 시 기존 태그 전체 교체
    #[validate(length(min = 1, max = 4, message = "태그는 1~4개 지정해야 합니다."))]
    pub tags: Option<Vec<String>>,
}

/// 모임 댓글 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyCommentResponse {
    pub party_comment_id: i64,
    pub nickname: String,
    pub contents: String,
    /// 조회한 회원이 작성한 댓글인지 여부
    pub is_owner: bool,
    pub created_at: NaiveDateTime,
}

/// 모임 참여 확정 회원 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyMemberResponse {
    pub member_id: i64,
    pub nickname: String,
}

/// 모임 상세 조회 응답 DTO
///
/// 모임 본문 외에 댓글/관심 여부/참여 확정 회원/주최자 정보를 함께 내려줍니다.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyResponse {
    pub party_id: i64,
    pub party_name: String,
    pub score: i32,
    pub start_dt: NaiveDate,
    pub end_dt: NaiveDate,
    pub amount: i32,
    pub number_people: i32,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub content: String,
    pub state: PartyState,
    pub tags: Vec<String>,

    /// 주최자 닉네임
    pub host_nickname: String,
    /// 주최자 매너 점수
    pub host_manner_point: i32,
    /// 조회한 회원이 주최자인지 여부
    pub is_owner: bool,
    /// 조회한 회원의 관심 등록 여부
    pub is_liked: bool,

    pub comments: Vec<PartyCommentResponse>,
    pub members: Vec<PartyMemberResponse>,
}

impl PartyResponse {
    pub fn assemble(
        party: party::Model,
        tags: Vec<String>,
        host_nickname: String,
        host_manner_point: i32,
        is_owner: bool,
        is_liked: bool,
        comments: Vec<PartyCommentResponse>,
        members: Vec<PartyMemberResponse>,
    ) -> Self {
        Self {
            party_id: party.party_id,
            party_name: party.party_name,
            score: party.score,
            start_dt: party.start_dt,
            end_dt: party.end_dt,
            amount: party.amount,
            number_people: party.number_people,
            location: party.location,
            latitude: party.latitude,
            longitude: party.longitude,
            content: party.content,
            state: party.state,
            tags,
            host_nickname,
            host_manner_point,
            is_owner,
            is_liked,
            comments,
            members,
        }
    }
}

/// 모임 가입 신청 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyApplyResponse {
    pub party_apply_id: i64,
    pub party_id: i64,
    pub target_member_id: i64,
    pub is_accept: bool,
    pub created_at: NaiveDateTime,
}

impl From<party_apply::Model> for PartyApplyResponse {
    fn from(apply: party_apply::Model) -> Self {
        Self {
            party_apply_id: apply.party_apply_id,
            party_id: apply.party_id,
            target_member_id: apply.target_member_id,
            is_accept: apply.is_accept,
            created_at: apply.created_at,
        }
    }
}

/// 모임 가입 신청 목록 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyApplyListResponse {
    pub content: Vec<PartyApplyResponse>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// 관심 모임 토글 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartyLikeResponse {
    pub party_id: i64,
    /// 토글 후 관심 등록 상태
    pub is_liked: bool,
}

/// 모임 댓글 작성 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartyCommentRequest {
    #[validate(length(min = 1, max = 500, message = "댓글은 1~500자 이내로 입력해야 합니다."))]
    pub contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_party_request_should_reject_empty_tags() {
        let req = CreatePartyRequest {
            party_name: "한강 러닝".to_string(),
            score: 50,
            start_dt: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            end_dt: NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
            amount: 0,
            number_people: 5,
            location: "여의도 한강공원".to_string(),
            latitude: 37.528,
            longitude: 126.933,
            content: "매주 토요일 아침 러닝".to_string(),
            tags: vec![],
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn create_party_request_should_reject_five_tags() {
        let req = CreatePartyRequest {
            party_name: "한강 러닝".to_string(),
            score: 50,
            start_dt: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            end_dt: NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
            amount: 0,
            number_people: 5,
            location: "여의도 한강공원".to_string(),
            latitude: 37.528,
            longitude: 126.933,
            content: "매주 토요일 아침 러닝".to_string(),
            tags: (1..=5).map(|i| format!("#태그{}", i)).collect(),
        };

        assert!(req.validate().is_err());
    }

}
