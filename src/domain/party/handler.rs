use axum::{
    extract::{Path, Query, State},
    Json,
};
use utoipa;
use validator::Validate;

use super::apply_service::PartyApplyService;
use super::comment_service::PartyCommentService;
use super::dto::{
    CreatePartyCommentRequest, CreatePartyRequest, PartyApplyListResponse, PartyApplyResponse,
    PartyCommentResponse, PartyLikeResponse, PartyResponse, UpdatePartyRequest,
};
use super::like_service::PartyLikeService;
use super::service::PartyService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::page::PageQuery;
use crate::utils::BaseResponse;

/// 모임 생성 API
#[utoipa::path(
    post,
    path = "/api/v1/parties",
    security(("bearer_auth" = [])),
    request_body = CreatePartyRequest,
    responses(
        (status = 200, description = "생성 성공", body = BaseResponse<PartyResponse>),
        (status = 400, description = "요청 값 검증 실패", body = ErrorResponse)
    ),
    tag = "Party"
)]
pub async fn create_party(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreatePartyRequest>,
) -> Result<Json<BaseResponse<PartyResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = PartyService::create_party(state, member_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 상세 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/parties/{party_id}",
    security(("bearer_auth" = [])),
    params(("party_id" = i64, Path, description = "모임 ID")),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<PartyResponse>),
        (status = 404, description = "모임 없음", body = ErrorResponse)
    ),
    tag = "Party"
)]
pub async fn get_party(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_id): Path<i64>,
) -> Result<Json<BaseResponse<PartyResponse>>, AppError> {
    let member_id = user.member_id()?;

    let result = PartyService::get_party(state, member_id, party_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 수정 API (주최자만)
#[utoipa::path(
    patch,
    path = "/api/v1/parties/{party_id}",
    security(("bearer_auth" = [])),
    params(("party_id" = i64, Path, description = "모임 ID")),
    request_body = UpdatePartyRequest,
    responses(
        (status = 200, description = "수정 성공", body = BaseResponse<PartyResponse>),
        (status = 403, description = "주최자 아님", body = ErrorResponse),
        (status = 404, description = "모임 없음", body = ErrorResponse)
    ),
    tag = "Party"
)]
pub async fn update_party(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_id): Path<i64>,
    Json(req): Json<UpdatePartyRequest>,
) -> Result<Json<BaseResponse<PartyResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = PartyService::update_party(state, member_id, party_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 삭제 API (주최자만)
#[utoipa::path(
    delete,
    path = "/api/v1/parties/{party_id}",
    security(("bearer_auth" = [])),
    params(("party_id" = i64, Path, description = "모임 ID")),
    responses(
        (status = 200, description = "삭제 성공"),
        (status = 403, description = "주최자 아님", body = ErrorResponse),
        (status = 404, description = "모임 없음", body = ErrorResponse)
    ),
    tag = "Party"
)]
pub async fn delete_party(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;

    PartyService::delete_party(state, member_id, party_id).await?;

    Ok(Json(BaseResponse::ok("모임이 삭제되었습니다.")))
}

/// 모임 가입 신청 API
#[utoipa::path(
    post,
    path = "/api/v1/parties/{party_id}/apply",
    security(("bearer_auth" = [])),
    params(("party_id" = i64, Path, description = "모임 ID")),
    responses(
        (status = 200, description = "신청 성공", body = BaseResponse<PartyApplyResponse>),
        (status = 404, description = "모임 없음", body = ErrorResponse),
        (status = 409, description = "중복 신청", body = ErrorResponse)
    ),
    tag = "PartyApply"
)]
pub async fn apply_party(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_id): Path<i64>,
) -> Result<Json<BaseResponse<PartyApplyResponse>>, AppError> {
    let member_id = user.member_id()?;

    let result = PartyApplyService::apply(state, member_id, party_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 가입 신청 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/parties/{party_id}/apply",
    security(("bearer_auth" = [])),
    params(
        ("party_id" = i64, Path, description = "모임 ID"),
        ("page" = Option<u64>, Query, description = "페이지 번호 (0부터)"),
        ("size" = Option<u64>, Query, description = "페이지 크기")
    ),
    responses(
        (status = 200, description = "조회 성공", body = BaseResponse<PartyApplyListResponse>),
        (status = 404, description = "모임 없음", body = ErrorResponse)
    ),
    tag = "PartyApply"
)]
pub async fn get_party_applies(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(party_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<BaseResponse<PartyApplyListResponse>>, AppError> {
    let result = PartyApplyService::get_applies(state, party_id, query).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 가입 신청 수락 API (주최자만)
#[utoipa::path(
    patch,
    path = "/api/v1/parties/{party_id}/apply/{target_member_id}",
    security(("bearer_auth" = [])),
    params(
        ("party_id" = i64, Path, description = "모임 ID"),
        ("target_member_id" = i64, Path, description = "신청 회원 ID")
    ),
    responses(
        (status = 200, description = "수락 성공", body = BaseResponse<PartyApplyResponse>),
        (status = 403, description = "주최자 아님", body = ErrorResponse),
        (status = 404, description = "모임 또는 신청 없음", body = ErrorResponse)
    ),
    tag = "PartyApply"
)]
pub async fn accept_party_apply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((party_id, target_member_id)): Path<(i64, i64)>,
) -> Result<Json<BaseResponse<PartyApplyResponse>>, AppError> {
    let member_id = user.member_id()?;

    let result = PartyApplyService::accept(state, member_id, party_id, target_member_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 관심 모임 토글 API
#[utoipa::path(
    post,
    path = "/api/v1/parties/{party_id}/likes",
    security(("bearer_auth" = [])),
    params(("party_id" = i64, Path, description = "모임 ID")),
    responses(
        (status = 200, description = "토글 성공", body = BaseResponse<PartyLikeResponse>),
        (status = 404, description = "모임 없음", body = ErrorResponse)
    ),
    tag = "PartyLike"
)]
pub async fn toggle_party_like(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_id): Path<i64>,
) -> Result<Json<BaseResponse<PartyLikeResponse>>, AppError> {
    let member_id = user.member_id()?;

    let result = PartyLikeService::toggle(state, member_id, party_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 댓글 작성 API
#[utoipa::path(
    post,
    path = "/api/v1/parties/{party_id}/comments",
    security(("bearer_auth" = [])),
    params(("party_id" = i64, Path, description = "모임 ID")),
    request_body = CreatePartyCommentRequest,
    responses(
        (status = 200, description = "작성 성공", body = BaseResponse<PartyCommentResponse>),
        (status = 404, description = "모임 없음", body = ErrorResponse)
    ),
    tag = "PartyComment"
)]
pub async fn create_party_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_id): Path<i64>,
    Json(req): Json<CreatePartyCommentRequest>,
) -> Result<Json<BaseResponse<PartyCommentResponse>>, AppError> {
    req.validate()?;
    let member_id = user.member_id()?;

    let result = PartyCommentService::create(state, member_id, party_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 모임 댓글 삭제 API (작성자만)
#[utoipa::path(
    delete,
    path = "/api/v1/parties/comments/{party_comment_id}",
    security(("bearer_auth" = [])),
    params(("party_comment_id" = i64, Path, description = "모임 댓글 ID")),
    responses(
        (status = 200, description = "삭제 성공"),
        (status = 403, description = "작성자 아님", body = ErrorResponse),
        (status = 404, description = "댓글 없음", body = ErrorResponse)
    ),
    tag = "PartyComment"
)]
pub async fn delete_party_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(party_comment_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;

    PartyCommentService::delete(state, member_id, party_comment_id).await?;

    Ok(Json(BaseResponse::ok("댓글이 삭제되었습니다.")))
}
