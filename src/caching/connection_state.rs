//! # 연결 상태 추적
//!
//! Redis 연결의 `connected` / `disconnected` 상태를 관리하고,
//! 백그라운드 heartbeat로 상태 변화를 비동기적으로 감지합니다.
//!
//! ```text
//!            probe/작업 성공
//!     ┌──────────────────────────┐
//!     ▼                          │
//! connected ──────────────▶ disconnected
//!        연결 계열 에러 / probe 타임아웃
//!        (Redis Client Error: ... 로그)
//! ```
//!
//! 재연결 자체는 `redis::aio::ConnectionManager`가 담당하며,
//! 이 모듈은 관찰된 결과를 상태로 반영하기만 합니다.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, error, info};
use redis::{RedisError, RedisResult};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::caching::store::CLIENT_ERROR_PREFIX;

/// 연결 단절로 간주되는 에러인지 판별합니다.
///
/// 서버가 응답한 에러(`WRONGTYPE` 등)는 연결이 살아 있다는 뜻이므로 제외합니다.
pub fn is_connection_failure(err: &RedisError) -> bool {
    err.is_connection_dropped() || err.is_io_error() || err.is_connection_refusal() || err.is_timeout()
}

/// 핸들 복제본과 heartbeat 작업이 공유하는 연결 상태 플래그
#[derive(Debug, Clone)]
pub struct ConnectionState {
    connected: Arc<AtomicBool>,
}

impl ConnectionState {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(connected)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// `connected`로 전이합니다. 복구된 경우에만 로그를 남깁니다.
    pub fn mark_connected(&self) {
        if !self.connected.swap(true, Ordering::SeqCst) {
            info!("✅ Redis 연결 복구됨");
        }
    }

    /// `disconnected`로 전이합니다.
    ///
    /// 전이가 일어난 순간에만 `Redis Client Error:` 로그를 남기고,
    /// 이미 끊긴 상태에서 반복되는 실패는 debug 레벨로만 기록합니다.
    pub fn mark_disconnected(&self, reason: &dyn Display) {
        if self.connected.swap(false, Ordering::SeqCst) {
            error!("{} {}", CLIENT_ERROR_PREFIX, reason);
        } else {
            debug!("Redis 연결 끊김 상태 유지: {}", reason);
        }
    }

    /// 저장소 호출 결과를 상태에 반영합니다.
    pub fn observe<T>(&self, result: &RedisResult<T>) {
        match result {
            Err(e) if is_connection_failure(e) => self.mark_disconnected(e),
            _ => self.mark_connected(),
        }
    }
}

/// 주기적으로 연결을 확인하는 백그라운드 작업
///
/// 마지막 소유자가 drop되면 작업도 중단됩니다.
#[derive(Debug)]
pub struct Heartbeat {
    handle: JoinHandle<()>,
}

impl Heartbeat {
    /// `interval`마다 `probe`를 실행하여 결과를 `state`에 반영합니다.
    ///
    /// `probe`가 `interval` 안에 끝나지 않으면 연결이 끊긴 것으로 봅니다.
    pub fn spawn<F, Fut>(state: ConnectionState, interval: Duration, mut probe: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = RedisResult<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match tokio::time::timeout(interval, probe()).await {
                    Ok(result) => state.observe(&result),
                    Err(_) => state.mark_disconnected(&format!(
                        "liveness probe timed out after {}ms",
                        interval.as_millis()
                    )),
                }
            }
        });

        Self { handle }
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
