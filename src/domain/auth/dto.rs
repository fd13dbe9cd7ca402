use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::provider::SocialProvider;
use crate::utils::error::AppError;

/// 닉네임 유효성 검증 (특수문자 제외)
/// 한글, 영문, 숫자만 허용
pub fn validate_nickname(nickname: &str) -> Result<(), AppError> {
    if nickname.chars().all(|c| c.is_alphanumeric() || is_korean(c)) {
        Ok(())
    } else {
        Err(AppError::ValidationError(
            "닉네임에 특수문자를 사용할 수 없습니다.".to_string(),
        ))
    }
}

/// 한글 문자 여부 확인 (가-힣, ㄱ-ㅎ, ㅏ-ㅣ)
fn is_korean(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{314E}' | '\u{314F}'..='\u{3163}')
}

/// 회원가입 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다."))]
    pub email: String,

    /// 사용자 닉네임 (1~20자, 특수문자 제외)
    #[validate(length(min = 1, max = 20, message = "닉네임은 1~20자 이내로 입력해야 합니다."))]
    pub nickname: String,

    #[validate(length(min = 8, message = "비밀번호는 8자 이상이어야 합니다."))]
    pub password: String,
}

/// 회원가입 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub member_id: i64,
    pub nickname: String,
}

/// 이메일 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다."))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다."))]
    pub password: String,
}

/// 로그인 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub member_id: i64,
    pub nickname: String,
    pub access_token: String,
}

/// 소셜 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLoginRequest {
    /// 소셜 서비스 구분 (KAKAO, GOOGLE, NAVER)
    pub provider: SocialProvider,

    /// 소셜 서비스에서 발급받은 Access Token
    #[validate(length(min = 1, message = "accessToken은 필수입니다."))]
    pub access_token: String,
}

/// 소셜 로그인 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLoginResponse {
    /// 신규 회원 여부 (자동 가입된 경우 true)
    pub is_new_member: bool,
    pub member_id: i64,
    pub nickname: String,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_should_reject_invalid_email() {
        let req = SignupRequest {
            email: "not-an-email".to_string(),
            nickname: "홍길동".to_string(),
            password: "password123".to_string(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn nickname_with_special_chars_should_be_rejected() {
        assert!(validate_nickname("hong!!").is_err());
        assert!(validate_nickname("한 글").is_err());
    }

    #[test]
    fn korean_alphanumeric_nickname_should_be_accepted() {
        assert!(validate_nickname("공덕동주민1").is_ok());
        assert!(validate_nickname("runner99").is_ok());
    }
}
