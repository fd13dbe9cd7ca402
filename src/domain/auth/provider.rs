use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::utils::error::AppError;

/// 지원하는 소셜 로그인 서비스
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SocialProvider {
    Kakao,
    Google,
    Naver,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "KAKAO",
            SocialProvider::Google => "GOOGLE",
            SocialProvider::Naver => "NAVER",
        }
    }

    /// 서비스별 사용자 정보 조회 엔드포인트
    fn user_info_url<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            SocialProvider::Kakao => &config.kakao_user_info_url,
            SocialProvider::Google => &config.google_user_info_url,
            SocialProvider::Naver => &config.naver_user_info_url,
        }
    }
}

/// 소셜 서비스에서 조회한 사용자 정보를 회원 속성으로 변환하는 어댑터
///
/// 서비스마다 응답 구조가 다르므로 이메일 추출 경로를 제공자별로 분기합니다.
/// 소셜 회원은 비밀번호가 없으므로 UUID를 대체 비밀번호로 사용합니다.
#[derive(Debug, Clone)]
pub struct ProviderUser {
    pub provider: SocialProvider,
    attributes: serde_json::Value,
}

impl ProviderUser {
    /// 소셜 서비스 API를 호출해 사용자 정보를 조회
    pub async fn fetch(
        provider: SocialProvider,
        access_token: &str,
        config: &AppConfig,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::new();
        let response = client
            .get(provider.user_info_url(config))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("소셜 서비스 호출 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized(
                "소셜 서비스 인증에 실패했습니다.".into(),
            ));
        }

        let attributes: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::InternalError(format!("소셜 응답 파싱 실패: {}", e)))?;

        Ok(Self {
            provider,
            attributes,
        })
    }

    pub fn from_attributes(provider: SocialProvider, attributes: serde_json::Value) -> Self {
        Self {
            provider,
            attributes,
        }
    }

    /// 제공자별 응답 구조에서 이메일 추출
    pub fn email(&self) -> Result<&str, AppError> {
        let email = match self.provider {
            SocialProvider::Kakao => self
                .attributes
                .pointer("/kakao_account/email")
                .and_then(|v| v.as_str()),
            SocialProvider::Google => self.attributes.get("email").and_then(|v| v.as_str()),
            SocialProvider::Naver => self
                .attributes
                .pointer("/response/email")
                .and_then(|v| v.as_str()),
        };

        email.ok_or_else(|| {
            AppError::Unauthorized("소셜 사용자 정보에 이메일이 없습니다.".into())
        })
    }

    /// 이메일 앞부분을 기본 닉네임으로 사용
    pub fn default_nickname(&self) -> Result<String, AppError> {
        let email = self.email()?;
        let local = email.split('@').next().unwrap_or(email);
        Ok(local.to_string())
    }

    /// 소셜 회원의 대체 비밀번호 (로그인에 사용되지 않음)
    pub fn password_placeholder(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kakao_user_email_should_come_from_kakao_account() {
        let user = ProviderUser::from_attributes(
            SocialProvider::Kakao,
            json!({ "id": 12345, "kakao_account": { "email": "kakao@kakao.com" } }),
        );

        assert_eq!(user.email().unwrap(), "kakao@kakao.com");
    }

    #[test]
    fn naver_user_email_should_come_from_response() {
        let user = ProviderUser::from_attributes(
            SocialProvider::Naver,
            json!({ "response": { "email": "naver@naver.com" } }),
        );

        assert_eq!(user.email().unwrap(), "naver@naver.com");
    }

    #[test]
    fn google_user_email_should_come_from_root() {
        let user = ProviderUser::from_attributes(
            SocialProvider::Google,
            json!({ "email": "google@gmail.com" }),
        );

        assert_eq!(user.email().unwrap(), "google@gmail.com");
        assert_eq!(user.default_nickname().unwrap(), "google");
    }

    #[test]
    fn missing_email_should_be_unauthorized() {
        let user = ProviderUser::from_attributes(SocialProvider::Kakao, json!({ "id": 1 }));

        assert!(matches!(user.email(), Err(AppError::Unauthorized(_))));
    }
}
