//! Redis 키-값 퍼사드
//!
//! Redis 연결 하나를 감싸 `get` / `set` / `del` / `is_alive`를 제공하는 캐시 계층과,
//! 이를 HTTP로 노출하는 작은 호스트 서비스입니다.
//!
//! # Features
//!
//! - **Fail-soft 작업**: 저장소 실패를 로그로 남기고 기본값 반환
//! - **명시적 결과 작업**: `try_get` / `try_set` / `try_del`로 에러를 직접 처리
//! - **연결 상태 추적**: heartbeat 기반 `is_alive()`
//! - **단일 연결 핸들**: 레지스트리가 프로세스당 하나의 핸들만 허용
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/cache/{key}
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  KeyValueStore  │ ← fail-soft 퍼사드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Redis      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use redis_facade::caching::redis::RedisClient;
//! use redis_facade::caching::store::KeyValueStore;
//! use redis_facade::config::CacheConfig;
//!
//! let redis = RedisClient::connect(&CacheConfig::from_env()).await?;
//!
//! redis.set("session:42", "abc123", 60).await;
//! assert_eq!(redis.get("session:42").await.as_deref(), Some("abc123"));
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod routes;
pub mod handlers;
