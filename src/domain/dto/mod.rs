//! # Data Transfer Objects (DTO) Module
//!
//! 클리닉 관리 API의 요청 DTO와 각 DTO의 검증 스키마를 정의합니다.
//! DTO 구조체는 검증을 통과한 정규화 레코드의 타입 있는 뷰이며,
//! 검증 규칙 자체는 필드 어노테이션이 아니라 명시적인 [`Schema`]로 선언됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── attachments/   # UploadAttachment
//! ├── auth/          # Login, Verify2FA
//! ├── invoices/      # AddPayment
//! ├── schedules/     # QuerySchedules
//! └── time_off/      # CreateTimeOff, ReviewTimeOff
//! ```
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! raw JSON ──▶ SchemaRegistry::get(SCHEMA) ──▶ Schema::validate ──▶ NormalizedRecord ──▶ DTO
//!                                                   │
//!                                                   └──▶ ValidationErrors (전체 위반 목록)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::{AddPaymentRequest, ValidatedRequest};
//!
//! let payment = AddPaymentRequest::from_payload(&payload)?;
//! assert!(payment.amount >= 1.0);
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::SchemaRegistry;
use crate::domain::schema::Schema;

pub mod attachments;
pub mod auth;
pub mod invoices;
pub mod schedules;
pub mod time_off;

pub use attachments::*;
pub use auth::*;
pub use invoices::*;
pub use schedules::*;
pub use time_off::*;

/// 등록된 스키마에 묶인 요청 DTO
///
/// 구현 타입은 스키마 이름만 선언하면 검증과 타입 변환을 함께 얻습니다.
pub trait ValidatedRequest: DeserializeOwned {
    /// 레지스트리에 등록된 스키마 이름
    const SCHEMA: &'static str;

    /// 전역 레지스트리에서 이 DTO의 스키마를 조회합니다.
    fn schema() -> AppResult<&'static Schema> {
        SchemaRegistry::global().get(Self::SCHEMA).ok_or_else(|| {
            AppError::InternalError(format!("스키마 {} 가 등록되지 않았습니다", Self::SCHEMA))
        })
    }

    /// 원시 페이로드를 검증하고 DTO로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationFailed` - 하나 이상의 필드 위반
    /// * `AppError::InternalError` - 스키마 미등록 또는 DTO/스키마 불일치
    fn from_payload(payload: &Map<String, Value>) -> AppResult<Self> {
        let record = Self::schema()?.validate(payload)?;
        record.into_dto()
    }
}
