//! # Request Schema Module
//!
//! 요청 페이로드 검증 계약 계층입니다. 필드에 데코레이터 메타데이터를 붙이는 대신
//! 필드 규칙의 순서 있는 목록([`Schema`])을 명시적으로 선언하고,
//! 순수 함수 [`validate`]가 스키마와 원시 페이로드를 받아 결과를 만듭니다.
//!
//! | 단계 | 결과 |
//! |------|------|
//! | 필수 필드 누락 | `MissingRequiredField` |
//! | 타입 변환 실패 | `TypeMismatch` |
//! | 제약 조건 실패 | `ConstraintViolation` |
//! | 위반 없음 | [`NormalizedRecord`] |
//!
//! 검증은 fail-fast 하지 않습니다. 호출자는 항상 전체 위반 목록을 받습니다.
//!
//! ```rust,ignore
//! use crate::domain::schema::{FieldRule, Schema};
//!
//! let schema = Schema::builder("ReviewTimeOff")
//!     .field(FieldRule::one_of("action", &["APPROVE", "REJECT"]).required())
//!     .field(FieldRule::string("notes").max_length(500))
//!     .build()?;
//!
//! match schema.validate(&payload) {
//!     Ok(record) => { /* 정규화된 값 사용 */ }
//!     Err(errors) => { /* errors.violations() 를 클라이언트에 전달 */ }
//! }
//! ```

pub mod definition;
pub mod record;
pub mod rule;
pub mod validate;
pub mod violation;

pub use definition::{Schema, SchemaBuilder, SchemaDefinitionError};
pub use record::{FieldValue, NormalizedRecord};
pub use rule::{Constraint, FieldKind, FieldRule};
pub use validate::{parse_iso_date, validate};
pub use violation::{ValidationErrors, Violation, ViolationKind};
