use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;

use super::dto::{
    LoginRequest, LoginResponse, SignupRequest, SignupResponse, SocialLoginRequest,
    SocialLoginResponse,
};
use super::provider::ProviderUser;
use crate::domain::member::entity::member::{self, Entity as Member};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::encode_token;

pub struct AuthService;

impl AuthService {
    /// 이메일 회원가입
    pub async fn signup(state: AppState, req: SignupRequest) -> Result<SignupResponse, AppError> {
        // 1. 닉네임 특수문자 검증
        super::dto::validate_nickname(&req.nickname)?;

        // 2. 이메일 중복 확인
        let existing = Member::find()
            .filter(member::Column::Email.eq(&req.email))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        if existing.is_some() {
            return Err(AppError::MemberDuplicate(
                "이미 가입된 이메일입니다.".to_string(),
            ));
        }

        // 3. 비밀번호 암호화 후 회원 생성
        let encoded_password = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("비밀번호 암호화 실패: {}", e)))?;

        let now = Utc::now().naive_utc();
        let new_member = member::ActiveModel {
            email: Set(req.email.clone()),
            encoded_password: Set(encoded_password),
            nickname: Set(req.nickname.clone()),
            manner_point: Set(0),
            role: Set("ROLE_USER".to_string()),
            is_certificated: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = new_member
            .insert(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        info!(member_id = saved.member_id, email = %saved.email, "회원가입 완료");

        Ok(SignupResponse {
            member_id: saved.member_id,
            nickname: saved.nickname,
        })
    }

    /// 이메일 로그인
    pub async fn login(state: AppState, req: LoginRequest) -> Result<LoginResponse, AppError> {
        // 1. 이메일로 회원 조회
        let member = Member::find()
            .filter(member::Column::Email.eq(&req.email))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?
            .ok_or_else(|| {
                AppError::Unauthorized("이메일 또는 비밀번호가 올바르지 않습니다.".to_string())
            })?;

        // 2. 비밀번호 검증
        let matched = bcrypt::verify(&req.password, &member.encoded_password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !matched {
            return Err(AppError::Unauthorized(
                "이메일 또는 비밀번호가 올바르지 않습니다.".to_string(),
            ));
        }

        // 3. Access Token 발급
        let access_token = encode_token(
            member.member_id.to_string(),
            &state.config.jwt_secret,
            state.config.jwt_expiration,
        )?;

        Ok(LoginResponse {
            member_id: member.member_id,
            nickname: member.nickname,
            access_token,
        })
    }

    /// 소셜 로그인 (미가입 시 자동 회원가입)
    pub async fn social_login(
        state: AppState,
        req: SocialLoginRequest,
    ) -> Result<SocialLoginResponse, AppError> {
        // 1. 소셜 서비스에서 사용자 정보 조회
        let provider_user =
            ProviderUser::fetch(req.provider, &req.access_token, &state.config).await?;

        Self::login_with_provider_user(state, provider_user).await
    }

    /// 조회된 소셜 사용자 정보로 로그인 처리
    ///
    /// 외부 호출 없이 검증할 수 있도록 조회와 분리되어 있습니다.
    pub async fn login_with_provider_user(
        state: AppState,
        provider_user: ProviderUser,
    ) -> Result<SocialLoginResponse, AppError> {
        let email = provider_user.email()?.to_string();

        // 1. 이메일로 기존 회원 조회
        let existing = Member::find()
            .filter(member::Column::Email.eq(&email))
            .one(&state.db)
            .await
            .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

        let (member, is_new_member) = match existing {
            Some(member) => (member, false),
            None => {
                // 2. 신규 회원 자동 가입
                //    소셜 회원은 비밀번호가 없으므로 UUID를 암호화해 저장
                let placeholder = provider_user.password_placeholder();
                let encoded_password = bcrypt::hash(&placeholder, bcrypt::DEFAULT_COST)
                    .map_err(|e| AppError::InternalError(format!("비밀번호 암호화 실패: {}", e)))?;

                let now = Utc::now().naive_utc();
                let new_member = member::ActiveModel {
                    email: Set(email.clone()),
                    encoded_password: Set(encoded_password),
                    nickname: Set(provider_user.default_nickname()?),
                    manner_point: Set(0),
                    role: Set("ROLE_USER".to_string()),
                    is_certificated: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                let saved = new_member
                    .insert(&state.db)
                    .await
                    .map_err(|e| AppError::InternalError(format!("DB Error: {}", e)))?;

                info!(
                    member_id = saved.member_id,
                    provider = provider_user.provider.as_str(),
                    "소셜 회원 자동 가입"
                );

                (saved, true)
            }
        };

        // 3. Access Token 발급
        let access_token = encode_token(
            member.member_id.to_string(),
            &state.config.jwt_secret,
            state.config.jwt_expiration,
        )?;

        Ok(SocialLoginResponse {
            is_new_member,
            member_id: member.member_id,
            nickname: member.nickname,
            access_token,
        })
    }
}
