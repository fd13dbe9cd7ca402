use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::member;
use super::entity::member_town;

/// 내 정보 조회 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfoResponse {
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub manner_point: i32,
    pub is_certificated: bool,
}

impl From<member::Model> for MemberInfoResponse {
    fn from(m: member::Model) -> Self {
        Self {
            member_id: m.member_id,
            email: m.email,
            nickname: m.nickname,
            manner_point: m.manner_point,
            is_certificated: m.is_certificated,
        }
    }
}

/// 회원 정보 수정 요청 DTO
///
/// 닉네임이 비어 있으면 MEMBER4001로 거부됩니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberInfoRequest {
    #[validate(length(max = 20, message = "닉네임은 20자 이내로 입력해야 합니다."))]
    pub nickname: Option<String>,
}

/// 비밀번호 변경 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub password: Option<String>,
}

/// 동네 추가 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberTownRequest {
    pub town_id: i64,

    /// 회원이 지정하는 동네 별칭
    #[validate(length(min = 1, max = 30, message = "동네 이름은 1~30자 이내로 입력해야 합니다."))]
    pub town_name: String,

    pub latitude: f64,
    pub longitude: f64,
}

/// 회원 동네 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberTownResponse {
    pub member_town_id: i64,
    pub town_id: i64,
    pub town_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<member_town::Model> for MemberTownResponse {
    fn from(mt: member_town::Model) -> Self {
        Self {
            member_town_id: mt.member_town_id,
            town_id: mt.town_id,
            town_name: mt.town_name,
            latitude: mt.latitude,
            longitude: mt.longitude,
        }
    }
}
