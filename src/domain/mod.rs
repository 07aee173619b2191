//! # Domain Module
//!
//! 요청 검증 계약의 도메인 계층입니다.
//!
//! - [`schema`] - 필드 규칙, 스키마, 순수 검증 함수, 위반/정규화 결과
//! - [`dto`] - 클리닉 API 요청 DTO와 각 DTO의 스키마 정의

pub mod dto;
pub mod schema;

pub use dto::*;
pub use schema::*;
