//! # Redis 캐시 클라이언트 구현
//!
//! Redis를 백엔드로 하는 `KeyValueStore` 구현을 제공합니다.
//!
//! ## 연결 관리
//!
//! `redis::aio::ConnectionManager` 하나를 프로세스 전체에서 공유합니다.
//! 멀티플렉싱 연결이므로 여러 `get`/`set`/`del` 호출이 동시에 진행될 수 있고,
//! 연결이 끊기면 라이브러리가 다음 요청 시 재연결합니다.
//!
//! 연결 상태는 두 경로로 갱신됩니다:
//!
//! - 각 작업의 결과 (`ConnectionState::observe`)
//! - 주기적인 `PING` heartbeat (`Heartbeat`)
//!
//! 따라서 작업 호출 없이도 `is_alive()`가 연결 끊김을 반영합니다.
//!
//! 재연결 시도 횟수와 연결/응답 대기 시간은 `CacheConfig::operation_timeout`으로
//! 제한됩니다. 서버가 사라져도 각 작업은 한도 안에 실패로 끝나고,
//! fail-soft 메서드는 기본값을 반환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, RedisResult};

use crate::caching::connection_state::{ConnectionState, Heartbeat};
use crate::caching::store::{CLIENT_ERROR_PREFIX, KeyValueStore};
use crate::config::CacheConfig;
use crate::core::errors::CacheError;

/// 연결이 끊긴 뒤 한 번의 작업이 시도하는 재연결 횟수
const RECONNECT_RETRIES: usize = 1;

/// Redis 캐시 클라이언트 래퍼
///
/// 복제(`Clone`)해도 같은 연결과 같은 연결 상태를 공유합니다.
/// 프로세스당 하나만 생성하여 `ServiceLocator`에 등록하는 것을 전제로 합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use redis_facade::caching::redis::RedisClient;
/// use redis_facade::caching::store::KeyValueStore;
/// use redis_facade::config::CacheConfig;
///
/// let redis = RedisClient::connect(&CacheConfig::from_env()).await?;
///
/// // 60초 TTL로 세션 저장
/// redis.set("session:42", "abc123", 60).await;
///
/// // 실패 시에도 None을 반환하며 에러는 로그로만 남습니다
/// let token: Option<String> = redis.get("session:42").await;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱 연결. 복제 비용이 낮고 모든 복제본이 같은 연결을 사용합니다.
    conn: ConnectionManager,
    state: ConnectionState,
    _heartbeat: Arc<Heartbeat>,
}

impl RedisClient {
    /// Redis 서버에 연결하고 heartbeat를 시작합니다.
    ///
    /// 연결 직후 `PING`으로 서버 가용성을 확인합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(RedisClient)` - 연결 성공
    /// - `Err(CacheError::Config)` - URL 형식 오류
    /// - `Err(CacheError::Store)` - 서버 연결 또는 `PING` 실패
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| CacheError::Config(format!("{}: {}", config.redacted_url(), e)))?;

        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(RECONNECT_RETRIES)
            .set_connection_timeout(config.operation_timeout)
            .set_response_timeout(config.operation_timeout);

        let mut conn = client
            .get_connection_manager_with_config(manager_config)
            .await
            .inspect_err(|e| {
                error!("{} {}", CLIENT_ERROR_PREFIX, e);
            })?;

        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공: {}", config.redacted_url());

        let state = ConnectionState::new(true);
        let probe_conn = conn.clone();
        let heartbeat = Heartbeat::spawn(state.clone(), config.heartbeat_interval, move || {
            let mut conn = probe_conn.clone();
            async move { redis::cmd("PING").query_async::<()>(&mut conn).await }
        });

        Ok(Self {
            conn,
            state,
            _heartbeat: Arc::new(heartbeat),
        })
    }

    fn observed<T>(&self, result: RedisResult<T>) -> Result<T, CacheError> {
        self.state.observe(&result);
        result.map_err(CacheError::from)
    }
}

#[async_trait]
impl KeyValueStore for RedisClient {
    fn is_alive(&self) -> bool {
        self.state.is_connected()
    }

    async fn try_get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let result: RedisResult<Option<String>> = conn.get(key).await;
        self.observed(result)
    }

    async fn try_set(&self, key: &str, value: &str, duration_seconds: u64) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let result: RedisResult<()> = conn.set_ex(key, value, duration_seconds).await;
        self.observed(result)
    }

    async fn try_del(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let result: RedisResult<()> = conn.del(key).await;
        self.observed(result)
    }
}
