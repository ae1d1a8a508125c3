//! # Service Registry - 프로세스 단위 인스턴스 레지스트리
//!
//! 공유 자원(예: Redis 연결 핸들)을 타입별로 하나씩만 보관하는 전역 레지스트리입니다.
//! "프로세스당 연결 핸들 하나" 규칙을 등록 시점에 강제합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! main()
//!   ├─ RedisClient::connect(&config)     ← 명시적 설정으로 생성
//!   ├─ ServiceLocator::set(Arc<RedisClient>)
//!   │     └─ 같은 타입 재등록 → RegistryError::AlreadyRegistered
//!   └─ ServiceLocator::get::<RedisClient>() → web::Data 로 핸들러에 주입
//! ```
//!
//! 컴포넌트는 레지스트리를 직접 뒤지지 않고 생성자 인자나 `web::Data`로
//! 의존성을 전달받습니다. 레지스트리는 조립 지점(`main`)에서만 사용합니다.

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// 레지스트리 에러
#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    /// 같은 타입의 인스턴스가 이미 등록됨
    #[error("Instance already registered: {0}")]
    AlreadyRegistered(String),
}

/// 전역 인스턴스 레지스트리
///
/// `TypeId`를 키로 각 타입당 하나의 인스턴스를 `Arc`로 보관합니다.
/// `RwLock`으로 동시 조회를 허용합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    /// 전역 Lazy static에서만 호출됩니다.
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다.
    ///
    /// 같은 타입이 이미 등록되어 있으면 기존 인스턴스를 유지하고
    /// `RegistryError::AlreadyRegistered`를 반환합니다.
    ///
    /// ```rust,ignore
    /// let redis = Arc::new(RedisClient::connect(&config).await?);
    /// ServiceLocator::set(redis)?;
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) -> Result<(), RegistryError> {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        if instances.contains_key(&type_id) {
            return Err(RegistryError::AlreadyRegistered(clean_name));
        }

        log::info!("📦 Registering: {}", clean_name);
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
        Ok(())
    }

    /// 등록된 인스턴스를 가져옵니다. 등록되지 않았으면 `None`을 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입을 요청하면 패닉이 발생합니다.
    /// 조립 순서 오류이므로 시작 단계에서 바로 드러나야 합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Instance not found: {}. Register it with ServiceLocator::set() first",
                Self::extract_clean_type_name(std::any::type_name::<T>())
            )
        })
    }

    /// 모듈 경로를 제거한 타입 이름을 반환합니다.
    ///
    /// `redis_facade::caching::redis::RedisClient` → `RedisClient`
    fn extract_clean_type_name(type_name: &str) -> String {
        type_name.rsplit("::").next().unwrap_or(type_name).to_string()
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
