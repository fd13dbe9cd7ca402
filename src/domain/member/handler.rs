use axum::{
    extract::{Path, State},
    Json,
};
use utoipa;
use validator::Validate;

use super::dto::{
    AddMemberTownRequest, MemberInfoResponse, MemberTownResponse, UpdateMemberInfoRequest,
    UpdatePasswordRequest,
};
use super::service::MemberService;
use super::town_service::MemberTownService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 내 정보 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/members/me",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<MemberInfoResponse>),
        (status = 404, description = "회원 없음", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn get_my_info(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<MemberInfoResponse>>, AppError> {
    let member_id = user.member_id()?;

    let result = MemberService::get_my_info(state, member_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 회원 정보 수정 API
///
/// 현재는 닉네임 변경만 지원합니다.
#[utoipa::path(
    patch,
    path = "/api/v1/members/me",
    security(("bearer_auth" = [])),
    request_body = UpdateMemberInfoRequest,
    responses(
        (status = 200, description = "수정 성공", body = BaseResponse<MemberInfoResponse>),
        (status = 400, description = "변경할 정보 없음", body = ErrorResponse),
        (status = 404, description = "회원 없음", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn update_my_info(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateMemberInfoRequest>,
) -> Result<Json<BaseResponse<MemberInfoResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = MemberService::update_my_info(state, member_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 비밀번호 변경 API
#[utoipa::path(
    patch,
    path = "/api/v1/members/me/password",
    security(("bearer_auth" = [])),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "변경 성공"),
        (status = 400, description = "변경할 비밀번호 없음", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn update_password(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;

    MemberService::update_password(state, member_id, req).await?;

    Ok(Json(BaseResponse::ok("비밀번호가 변경되었습니다.")))
}

/// 회원 동네 추가 API
#[utoipa::path(
    post,
    path = "/api/v1/members/towns",
    security(("bearer_auth" = [])),
    request_body = AddMemberTownRequest,
    responses(
        (status = 200, description = "추가 성공", body = BaseResponse<MemberTownResponse>),
        (status = 400, description = "등록 가능한 동네 수 초과", body = ErrorResponse),
        (status = 404, description = "회원 또는 동네 없음", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn add_town(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<AddMemberTownRequest>,
) -> Result<Json<BaseResponse<MemberTownResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = MemberTownService::add_town(state, member_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 회원 동네 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/members/towns",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<Vec<MemberTownResponse>>)
    ),
    tag = "Member"
)]
pub async fn get_towns(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<Vec<MemberTownResponse>>>, AppError> {
    let member_id = user.member_id()?;

    let result = MemberTownService::get_towns(state, member_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 회원 동네 삭제 API
#[utoipa::path(
    delete,
    path = "/api/v1/members/towns/{member_town_id}",
    security(("bearer_auth" = [])),
    params(
        ("member_town_id" = i64, Path, description = "회원 동네 ID")
    ),
    responses(
        (status = 200, description = "삭제 성공"),
        (status = 404, description = "동네 없음", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn remove_town(
    State(state): State<AppState>,
    user: AuthUser,
    Path(member_town_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;

    MemberTownService::remove_town(state, member_id, member_town_id).await?;

    Ok(Json(BaseResponse::ok("동네가 삭제되었습니다.")))
}
