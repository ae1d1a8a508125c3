//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 캐시 연결, 서버 바인딩, 실행 환경 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 캐시 설정
//! export REDIS_URL="redis://127.0.0.1:6379"
//! export REDIS_HEARTBEAT_MS="1000"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```
//!
//! `PROFILE=dev|prod`이면 `main`이 `.env.dev` / `.env.prod` 파일을 먼저 로드합니다.

pub mod data_config;

pub use data_config::*;
