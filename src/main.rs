//! Redis 키-값 퍼사드 호스트 애플리케이션
//!
//! Redis 연결 핸들을 한 번 생성하여 레지스트리에 등록하고,
//! Actix-web HTTP 서버로 캐시 API와 헬스체크를 제공합니다.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use redis_facade::caching::redis::RedisClient;
use redis_facade::caching::store::KeyValueStore;
use redis_facade::config::{CacheConfig, Environment, ServerConfig};
use redis_facade::core::registry::ServiceLocator;
use redis_facade::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    // RUST_LOG가 .env 파일에 있을 수 있으므로 파일을 먼저 읽고, 결과는 로거 초기화 후 출력
    let env_file = load_env_file(&std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
    init_logging();
    env_file.report();

    info!("🚀 Redis 퍼사드 서비스 시작중... (environment: {:?})", Environment::current());

    // 프로세스 단일 연결 핸들 생성 및 등록
    let redis_client = initialize_cache().await?;
    ServiceLocator::set(redis_client).map_err(io::Error::other)?;

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 등록된 `RedisClient`를 `web::Data<dyn KeyValueStore>`로 모든 워커에 주입합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let store: web::Data<dyn KeyValueStore> =
        web::Data::from(ServiceLocator::get::<RedisClient>() as Arc<dyn KeyValueStore>);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Cache API: http://{}/api/v1/cache/{{key}}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 프로필별 `.env` 파일 로드 결과
struct EnvFileLoad {
    profile: String,
    file: &'static str,
    result: dotenv::Result<PathBuf>,
}

impl EnvFileLoad {
    fn report(&self) {
        info!("Current profile: {}", self.profile);

        match &self.result {
            Ok(_) => info!("{} 파일 로드 됨", self.file),
            Err(e) => error!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file(profile: &str) -> EnvFileLoad {
    let (file, result) = match profile {
        "prod" => (".env.prod", dotenv::from_filename(".env.prod")),
        "dev" => (".env.dev", dotenv::from_filename(".env.dev")),
        _ => (".env", dotenv()),
    };

    EnvFileLoad {
        profile: profile.to_string(),
        file,
        result,
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 로그는 표준 에러로 출력됩니다.
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// Redis 연결을 초기화합니다
///
/// 연결 실패 시 애플리케이션이 종료됩니다.
async fn initialize_cache() -> io::Result<Arc<RedisClient>> {
    let config = CacheConfig::from_env();

    info!(
        "📡 Redis 연결 중... ({}, heartbeat {}ms, timeout {}ms)",
        config.redacted_url(),
        config.heartbeat_interval.as_millis(),
        config.operation_timeout.as_millis()
    );

    let client = RedisClient::connect(&config).await.map_err(|e| {
        error!("Redis 연결 실패: {}", e);
        io::Error::other(e)
    })?;

    Ok(Arc::new(client))
}
