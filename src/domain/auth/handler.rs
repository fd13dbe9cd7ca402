use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use utoipa;
use validator::Validate;

use super::dto::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, SocialLoginRequest,
    SocialLoginResponse,
};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::cookie::create_access_token_cookie;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 회원가입 API
///
/// 이메일/비밀번호/닉네임으로 신규 회원을 등록합니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "회원가입 성공", body = BaseResponse<SignupResponse>),
        (status = 400, description = "요청 값 검증 실패", body = ErrorResponse),
        (status = 409, description = "이미 가입된 이메일", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<BaseResponse<SignupResponse>>, AppError> {
    req.validate()?;

    let result = AuthService::signup(state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 이메일 로그인 API
///
/// 이메일/비밀번호 검증 후 JWT Access Token을 발급합니다.
/// 토큰은 응답 본문과 쿠키 양쪽으로 전달됩니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = BaseResponse<LoginResponse>),
        (status = 401, description = "이메일 또는 비밀번호 불일치", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let expiration = state.config.jwt_expiration;
    let result = AuthService::login(state, req).await?;

    let cookie = create_access_token_cookie(&result.access_token, expiration)?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(BaseResponse::success(result)),
    ))
}

/// 소셜 로그인 API
///
/// 카카오/구글/네이버 액세스 토큰으로 로그인합니다.
/// 미가입 이메일인 경우 자동으로 회원가입 처리됩니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login/social",
    request_body = SocialLoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = BaseResponse<SocialLoginResponse>),
        (status = 401, description = "소셜 토큰 검증 실패", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn social_login(
    State(state): State<AppState>,
    Json(req): Json<SocialLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;

    let expiration = state.config.jwt_expiration;
    let result = AuthService::social_login(state, req).await?;

    let cookie = create_access_token_cookie(&result.access_token, expiration)?;

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(BaseResponse::success(result)),
    ))
}
