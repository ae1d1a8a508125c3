//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 fail-soft 키-값 접근 계층을 제공합니다.
//!
//! # 주요 기능
//!
//! - [`store::KeyValueStore`]: `get` / `set` / `del` / `is_alive` 인터페이스
//! - [`redis::RedisClient`]: 멀티플렉싱 연결 하나를 공유하는 Redis 구현
//! - [`connection_state`]: 연결 상태 추적과 heartbeat
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use redis_facade::caching::redis::RedisClient;
//! use redis_facade::caching::store::KeyValueStore;
//! use redis_facade::config::CacheConfig;
//!
//! let cache = RedisClient::connect(&CacheConfig::from_env()).await?;
//! cache.set("session:abc", "user-1", 3600).await;
//!
//! let user_id: Option<String> = cache.get("session:abc").await;
//! cache.del("session:abc").await;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://127.0.0.1:6379  # 기본값
//! REDIS_HEARTBEAT_MS=1000            # 기본값
//! ```

pub mod connection_state;
pub mod redis;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
