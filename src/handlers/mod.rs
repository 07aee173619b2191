//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 스키마 검증 추출기를 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Clinic frontend, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - Rate limit, CORS, Locale       ← Pipeline
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   SchemaRegistry - 등록된 검증 스키마            ← Core
//! ├─────────────────────────────────────────────┤
//!   Schema / DTO - 검증 규칙과 요청 타입           ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`schemas`] - 스키마 조회와 페이로드 검증 API
//! - [`index`] - 로케일이 적용된 인덱스
//! - [`extract`] - `Validated<T>`, `ValidatedQuery<T>` 추출기
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, `AppError`의
//! `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.

pub mod extract;
pub mod index;
pub mod schemas;

pub use extract::{Validated, ValidatedQuery};
