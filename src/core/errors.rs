//! # Application Error Handling System
//!
//! 서비스 전역의 에러 타입을 정의합니다.
//!
//! | 타입 | 계층 | 용도 |
//! |------|------|------|
//! | [`CacheError`] | 캐시 | 키-값 저장소 작업 실패, 연결 설정 오류 |
//! | [`AppError`] | HTTP | `actix_web::ResponseError`로 JSON 에러 응답 변환 |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 키 없음 (또는 조회 실패) |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn read(store: &dyn KeyValueStore, key: &str) -> AppResult<String> {
//!     store.get(key).await
//!         .ok_or_else(|| AppError::NotFound(format!("Key not found: {}", key)))
//! }
//! ```

use thiserror::Error;

/// 캐시 계층 에러
///
/// 런타임 에러는 "저장소 작업 실패" 한 종류이며(`Store`),
/// 연결 손실, 프로토콜 오류, 라이브러리 수준 타임아웃을 모두 포함합니다.
#[derive(Error, Debug)]
pub enum CacheError {
    /// 연결 URL 등 클라이언트 설정 오류
    #[error("Invalid cache configuration: {0}")]
    Config(String),

    /// 저장소 작업 실패
    #[error(transparent)]
    Store(#[from] redis::RedisError),
}

/// HTTP 계층 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// ```json
    /// { "error": "Not found: Key not found: session:42" }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
