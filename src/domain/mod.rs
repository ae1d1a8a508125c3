//! # Domain Module
//!
//! HTTP 계층과 주고받는 데이터 구조를 정의합니다.
//! 캐시 값 자체는 불투명 문자열이므로 별도의 도메인 모델은 없습니다.

pub mod dto;

pub use dto::*;
