//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의합니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Handlers (이 모듈)           │ ← 요청/응답 처리
//! ├──────────────────────────────┤
//! │  KeyValueStore (caching)     │ ← fail-soft 캐시 접근
//! ├──────────────────────────────┤
//! │  Redis                       │ ← 외부 저장소
//! └──────────────────────────────┘
//! ```
//!
//! 핸들러는 저장소를 `web::Data<dyn KeyValueStore>`로 주입받으므로
//! 테스트에서는 인메모리 구현으로 바꿔 끼울 수 있습니다.

pub mod cache;
