//! 클리닉 요청 스키마 서비스
//!
//! 클리닉 관리 API로 들어오는 요청 페이로드를 선언적 스키마로 검증하고,
//! 모든 필드 위반을 한 번에 보고하는 서비스입니다.
//! 다국어 프론트엔드를 위한 로케일 라우팅 미들웨어를 함께 제공합니다.
//!
//! # Features
//!
//! - **선언적 스키마**: 필드 타입, 필수 여부, 제약조건을 값으로 선언
//! - **전체 위반 수집**: 첫 실패에서 멈추지 않고 모든 위반을 결정적 순서로 반환
//! - **타입 변환**: 숫자 문자열(`"25000"`) → 숫자, `YYYY-MM-DD` → 날짜
//! - **스키마 레지스트리**: `inventory` 기반 자동 등록
//! - **로케일 라우팅**: `ar`, `en`, `ckb`, `kmr` 접두사 및 `Accept-Language` 협상
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← Rate limit, CORS, Locale
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, Validated<T> 추출기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SchemaRegistry  │ ← 등록된 스키마 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Schema / DTO   │ ← 검증 규칙, 정규화 레코드, 요청 타입
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use clinic_schema_service::domain::dto::{AddPaymentRequest, ValidatedRequest};
//!
//! let payload = serde_json::json!({ "amount": "25000", "method": "CASH" });
//! let payment = AddPaymentRequest::from_payload(payload.as_object().unwrap())?;
//! assert_eq!(payment.amount, 25000.0);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
