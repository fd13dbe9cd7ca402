use axum::{
    async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;
use crate::utils::cookie::ACCESS_TOKEN_COOKIE;
use crate::utils::error::AppError;
use crate::utils::jwt::{decode_access_token, Claims};

/// 인증된 사용자 정보를 담는 Extractor
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// JWT Claims에서 회원 ID를 추출합니다.
    pub fn member_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("유효하지 않은 사용자 ID입니다.".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출 시도
        let token = if let Some(auth_header) = parts.headers.get(AUTHORIZATION) {
            let auth_header_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("잘못된 헤더 형식입니다.".to_string()))?;

            if !auth_header_str.starts_with("Bearer ") {
                return Err(AppError::Unauthorized(
                    "토큰 형식이 올바르지 않습니다.".to_string(),
                ));
            }

            auth_header_str[7..].to_string()
        } else {
            // 2. 쿠키에서 토큰 추출 시도
            let jar = CookieJar::from_headers(&parts.headers);
            jar.get(ACCESS_TOKEN_COOKIE)
                .map(|c| c.value().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Unauthorized("로그인이 필요합니다.".to_string()))?
        };

        // 토큰 검증 및 디코딩 (access token만 허용)
        let claims = decode_access_token(&token, &state.config.jwt_secret)?;

        Ok(AuthUser(claims))
    }
}
