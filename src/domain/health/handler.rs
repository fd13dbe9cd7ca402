use axum::{extract::State, Json};
use utoipa;

use super::dto::HealthResponse;
use crate::state::AppState;
use crate::utils::BaseResponse;

/// 헬스체크 API
///
/// 서버 상태와 DB 연결 여부를 반환합니다.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "서버 정상", body = BaseResponse<HealthResponse>)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<BaseResponse<HealthResponse>> {
    let database = match state.db.ping().await {
        Ok(_) => "up".to_string(),
        Err(e) => format!("down: {}", e),
    };

    Json(BaseResponse::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    }))
}
