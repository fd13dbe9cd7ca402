use serde::Serialize;
use utoipa::ToSchema;

/// 헬스체크 응답 DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// DB ping 결과
    pub database: String,
}
