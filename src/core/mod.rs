//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 요소를 제공합니다.
//!
//! - [`errors`] - `AppError`와 HTTP 응답 매핑
//! - [`registry`] - `inventory` 기반 요청 스키마 레지스트리

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
