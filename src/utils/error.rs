use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
///
/// 도메인별 에러 코드는 닫힌 열거형으로 관리합니다.
/// 조회 실패나 불변식 위반은 즉시 `Err`로 반환되고,
/// `IntoResponse`에서 공통 에러 응답으로 변환됩니다.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    InternalError(String),
    ValidationError(String),
    JsonParseFailed(String),

    // 회원(member)
    MemberNotFound(String),
    MemberDuplicate(String),
    MemberValidNot(String),
    MemberTownAddMax(String),

    // 동네(town)
    TownNotFound(String),

    // 모임(party)
    PartyNotFound(String),
    PartyNotHost(String),
    PartyApplyNotFound(String),
    PartyApplyDuplicate(String),
    PartyCommentNotFound(String),

    // 게시판(post)
    PostNotFound(String),
    PostValidNot(String),
    CategoryNotFound(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::InternalError(msg)
            | AppError::ValidationError(msg)
            | AppError::MemberNotFound(msg)
            | AppError::MemberDuplicate(msg)
            | AppError::MemberValidNot(msg)
            | AppError::MemberTownAddMax(msg)
            | AppError::TownNotFound(msg)
            | AppError::PartyNotFound(msg)
            | AppError::PartyNotHost(msg)
            | AppError::PartyApplyNotFound(msg)
            | AppError::PartyApplyDuplicate(msg)
            | AppError::PartyCommentNotFound(msg)
            | AppError::PostNotFound(msg)
            | AppError::PostValidNot(msg)
            | AppError::CategoryNotFound(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("잘못된 요청 형식입니다: {}", msg),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::NotFound(_) => "COMMON404",
            AppError::Unauthorized(_) => "AUTH4001",
            AppError::Forbidden(_) => "COMMON403",
            AppError::InternalError(_) => "COMMON500",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::MemberNotFound(_) => "MEMBER4041",
            AppError::MemberDuplicate(_) => "MEMBER4091",
            AppError::MemberValidNot(_) => "MEMBER4001",
            AppError::MemberTownAddMax(_) => "MEMBER4002",
            AppError::TownNotFound(_) => "TOWN4041",
            AppError::PartyNotFound(_) => "PARTY4041",
            AppError::PartyNotHost(_) => "APPLY4031",
            AppError::PartyApplyNotFound(_) => "APPLY4041",
            AppError::PartyApplyDuplicate(_) => "APPLY4091",
            AppError::PartyCommentNotFound(_) => "PCOMMENT4041",
            AppError::PostNotFound(_) => "POST4041",
            AppError::PostValidNot(_) => "POST4031",
            AppError::CategoryNotFound(_) => "CATEGORY4041",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::ValidationError(_)
            | AppError::JsonParseFailed(_)
            | AppError::MemberValidNot(_)
            | AppError::MemberTownAddMax(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) | AppError::PartyNotHost(_) | AppError::PostValidNot(_) => {
                StatusCode::FORBIDDEN
            }
            AppError::NotFound(_)
            | AppError::MemberNotFound(_)
            | AppError::TownNotFound(_)
            | AppError::PartyNotFound(_)
            | AppError::PartyApplyNotFound(_)
            | AppError::PartyCommentNotFound(_)
            | AppError::PostNotFound(_)
            | AppError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MemberDuplicate(_) | AppError::PartyApplyDuplicate(_) => {
                StatusCode::CONFLICT
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        // 에러 로깅
        match &self {
            AppError::InternalError(_) => {
                error!("Internal Server Error: {}", message);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.to_string())
    }
}

/// DTO 필드 검증 실패를 AppError로 변환
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "요청 값이 올바르지 않습니다.".to_string());
        AppError::ValidationError(message)
    }
}

/// sea-orm 에러를 AppError로 변환
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_duplicate_should_map_to_conflict() {
        let err = AppError::MemberDuplicate("이미 가입된 이메일입니다.".to_string());

        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "MEMBER4091");
    }

    #[test]
    fn party_not_host_should_map_to_forbidden() {
        let err = AppError::PartyNotHost("모임 주최자가 아닙니다.".to_string());

        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.error_code(), "APPLY4031");
    }

    #[test]
    fn not_found_family_should_map_to_404() {
        for err in [
            AppError::MemberNotFound(String::new()),
            AppError::TownNotFound(String::new()),
            AppError::PartyNotFound(String::new()),
            AppError::PartyApplyNotFound(String::new()),
            AppError::PostNotFound(String::new()),
            AppError::CategoryNotFound(String::new()),
        ] {
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
    }
}
