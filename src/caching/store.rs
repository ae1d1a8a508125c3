//! # 키-값 저장소 추상화
//!
//! 캐시 백엔드가 구현해야 하는 `KeyValueStore` trait을 정의합니다.
//!
//! 두 가지 호출 방식을 제공합니다:
//!
//! - **명시적 결과** (`try_get`, `try_set`, `try_del`): 실패를 `CacheError`로 반환
//! - **Fail-soft** (`get`, `set`, `del`): 실패를 로그로 남기고 기본값을 반환
//!
//! Fail-soft 메서드는 trait의 기본 구현으로 제공되며, 내부적으로 명시적 결과
//! 메서드를 호출합니다. 따라서 백엔드는 `try_*`와 `is_alive`만 구현하면 됩니다.
//!
//! ```rust,ignore
//! use redis_facade::caching::store::KeyValueStore;
//!
//! store.set("session:42", "abc123", 60).await;
//! assert_eq!(store.get("session:42").await.as_deref(), Some("abc123"));
//!
//! // 에러를 직접 다루고 싶은 경우
//! match store.try_get("session:42").await {
//!     Ok(value) => println!("{:?}", value),
//!     Err(e) => eprintln!("저장소 오류: {}", e),
//! }
//! ```

use async_trait::async_trait;
use log::error;

use crate::core::errors::CacheError;

/// 연결 상태 변화(끊김) 로그 접두사
pub const CLIENT_ERROR_PREFIX: &str = "Redis Client Error:";
/// `get` 실패 로그 접두사
pub const GET_ERROR_PREFIX: &str = "Error getting key from Redis:";
/// `set` 실패 로그 접두사
pub const SET_ERROR_PREFIX: &str = "Error setting key in Redis:";
/// `del` 실패 로그 접두사
pub const DEL_ERROR_PREFIX: &str = "Error deleting key from Redis:";

/// 키-값 저장소 인터페이스
///
/// 키와 값은 모두 불투명한 문자열이며 검증이나 변환을 하지 않습니다.
/// 만료 시간은 초 단위이고, 실제 만료 처리는 저장소에 위임합니다.
///
/// 구현체는 여러 작업이 동시에 진행될 수 있도록 `&self`로 동작해야 합니다.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 현재 연결 상태를 반환합니다. 부수 효과가 없고 실패하지 않습니다.
    fn is_alive(&self) -> bool;

    /// 키에 해당하는 값을 조회합니다.
    ///
    /// - `Ok(Some(value))` - 저장된 값
    /// - `Ok(None)` - 키가 없음 (또는 만료됨)
    /// - `Err(CacheError)` - 저장소 작업 실패
    async fn try_get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// 만료 시간과 함께 값을 저장합니다. 기존 값은 덮어씁니다.
    async fn try_set(&self, key: &str, value: &str, duration_seconds: u64) -> Result<(), CacheError>;

    /// 키를 삭제합니다. 키가 없어도 성공으로 처리합니다.
    async fn try_del(&self, key: &str) -> Result<(), CacheError>;

    /// 값을 조회하고, 실패 시 로그를 남긴 뒤 `None`을 반환합니다.
    ///
    /// 호출자는 "키 없음"과 "저장소 오류"를 구분할 수 없습니다.
    async fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                error!("{} {}", GET_ERROR_PREFIX, e);
                None
            }
        }
    }

    /// 값을 저장하고, 실패 시 로그만 남기고 정상 반환합니다.
    async fn set(&self, key: &str, value: &str, duration_seconds: u64) {
        if let Err(e) = self.try_set(key, value, duration_seconds).await {
            error!("{} {}", SET_ERROR_PREFIX, e);
        }
    }

    /// 키를 삭제하고, 실패 시 로그만 남기고 정상 반환합니다.
    async fn del(&self, key: &str) {
        if let Err(e) = self.try_del(key).await {
            error!("{} {}", DEL_ERROR_PREFIX, e);
        }
    }
}
