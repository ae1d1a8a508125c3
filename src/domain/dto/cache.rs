//! 캐시 API 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `PUT /api/v1/cache/{key}` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct SetValueRequest {
    /// 저장할 값 (불투명 문자열, 변환 없음)
    pub value: String,

    /// 만료 시간 (초, 1 이상)
    #[validate(range(min = 1, message = "ttl_seconds는 1 이상이어야 합니다"))]
    pub ttl_seconds: u64,
}

/// 조회된 캐시 항목
#[derive(Debug, Serialize)]
pub struct CacheEntryResponse {
    pub key: String,
    pub value: String,
}

/// 공통 API 응답 래퍼
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { success: true, data }
    }
}
