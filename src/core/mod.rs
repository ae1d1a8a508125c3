//! # Core Framework Module
//!
//! 서비스 전반에서 사용하는 핵심 구성 요소를 제공합니다.
//!
//! ### [`registry`] - 프로세스 단위 인스턴스 레지스트리
//! - **ServiceLocator**: 타입별로 하나의 공유 인스턴스만 등록 허용
//! - **중복 등록 거부**: 연결 핸들이 둘 이상 생기는 것을 조립 단계에서 차단
//!
//! ### [`errors`] - 통합 에러 처리
//! - **CacheError**: 저장소 작업 실패와 설정 오류
//! - **AppError**: Actix-Web `ResponseError` 구현으로 HTTP 응답 자동 변환
//!
//! ## 애플리케이션 조립
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use redis_facade::caching::redis::RedisClient;
//! use redis_facade::config::CacheConfig;
//! use redis_facade::core::registry::ServiceLocator;
//!
//! let redis = Arc::new(RedisClient::connect(&CacheConfig::from_env()).await?);
//! ServiceLocator::set(redis)?;
//!
//! let store = ServiceLocator::get::<RedisClient>();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
