use std::env;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: i64,

    /// 게시글 이미지 업로드 디렉토리
    pub upload_dir: String,

    // Social Login
    pub kakao_user_info_url: String,
    pub google_user_info_url: String,
    pub naver_user_info_url: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "DATABASE_URL 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "sqlite::memory:".to_string()
        });

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "secret".to_string()
        });

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidExpiration)?;

        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        let kakao_user_info_url = env::var("KAKAO_USER_INFO_URL")
            .unwrap_or_else(|_| "https://kapi.kakao.com/v2/user/me".to_string());
        let google_user_info_url = env::var("GOOGLE_USER_INFO_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string());
        let naver_user_info_url = env::var("NAVER_USER_INFO_URL")
            .unwrap_or_else(|_| "https://openapi.naver.com/v1/nid/me".to_string());

        Ok(Self {
            server_port,
            database_url,
            jwt_secret,
            jwt_expiration,
            upload_dir,
            kakao_user_info_url,
            google_user_info_url,
            naver_user_info_url,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid expiration time")]
    InvalidExpiration,
}
