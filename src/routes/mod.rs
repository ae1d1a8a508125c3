//! API 라우트 설정 모듈
//!
//! 캐시 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | 설명 |
//! |--------|------|------|
//! | `GET` | `/health` | 서비스 및 Redis 연결 상태 |
//! | `GET` | `/api/v1/cache/{key}` | 값 조회 |
//! | `PUT` | `/api/v1/cache/{key}` | 값 저장 (TTL 필수) |
//! | `DELETE` | `/api/v1/cache/{key}` | 값 삭제 |
//!
//! 모든 라우트는 앱 데이터에 `web::Data<dyn KeyValueStore>`가 등록되어 있어야 합니다.

use crate::caching::store::KeyValueStore;
use crate::handlers;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(store)
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_cache_routes(cfg);
}

/// 캐시 라우트를 설정합니다
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/cache/session:42 \
///   -H "Content-Type: application/json" \
///   -d '{"value":"abc123","ttl_seconds":60}'
///
/// curl http://localhost:8080/api/v1/cache/session:42
///
/// curl -X DELETE http://localhost:8080/api/v1/cache/session:42
/// ```
fn configure_cache_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cache")
            .service(handlers::cache::get_value)
            .service(handlers::cache::set_value)
            .service(handlers::cache::delete_value),
    );
}

/// 헬스체크 엔드포인트
///
/// Redis 연결이 끊겨도 서비스는 fail-soft로 동작하므로 항상 200을 반환하고,
/// 상태만 `degraded`로 표시합니다.
#[get("/health")]
async fn health_check(store: web::Data<dyn KeyValueStore>) -> HttpResponse {
    let redis_alive = store.is_alive();

    HttpResponse::Ok().json(json!({
        "status": if redis_alive { "healthy" } else { "degraded" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "redis": redis_alive
    }))
}
