//! 캐시 API 핸들러
//!
//! `KeyValueStore`의 fail-soft 작업을 HTTP로 노출합니다.
//! 저장소 장애 시에도 5xx를 반환하지 않으며, 조회 실패는 "키 없음"과 같은 404로 응답합니다.

use actix_web::{HttpResponse, delete, get, put, web};
use validator::Validate;

use crate::caching::store::KeyValueStore;
use crate::core::errors::{AppError, AppResult};
use crate::domain::{ApiResponse, CacheEntryResponse, SetValueRequest};

/// 키에 저장된 값을 조회합니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/cache/session:42
/// ```
#[get("/{key}")]
pub async fn get_value(
    store: web::Data<dyn KeyValueStore>,
    key: web::Path<String>,
) -> AppResult<HttpResponse> {
    let key = key.into_inner();

    match store.get(&key).await {
        Some(value) => Ok(HttpResponse::Ok().json(ApiResponse::success(CacheEntryResponse { key, value }))),
        None => Err(AppError::NotFound(format!("Key not found: {}", key))),
    }
}

/// 만료 시간과 함께 값을 저장합니다.
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/cache/session:42 \
///   -H "Content-Type: application/json" \
///   -d '{"value":"abc123","ttl_seconds":60}'
/// ```
#[put("/{key}")]
pub async fn set_value(
    store: web::Data<dyn KeyValueStore>,
    key: web::Path<String>,
    payload: web::Json<SetValueRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    store.set(&key, &payload.value, payload.ttl_seconds).await;

    Ok(HttpResponse::NoContent().finish())
}

/// 키를 삭제합니다.
#[delete("/{key}")]
pub async fn delete_value(
    store: web::Data<dyn KeyValueStore>,
    key: web::Path<String>,
) -> AppResult<HttpResponse> {
    store.del(&key).await;

    Ok(HttpResponse::NoContent().finish())
}
