//! 검증 위반 레코드
//!
//! 스키마 검증이 생성하는 필드 단위 위반 정보입니다.
//! 위반 목록의 HTTP 응답 변환은 [`crate::core::errors::AppError`]가 담당합니다.

use serde::Serialize;
use thiserror::Error;

use super::rule::{Constraint, FieldKind};

/// 위반 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// 필수 필드가 없거나 `null` 또는 빈 문자열
    MissingRequiredField,
    /// 선언된 타입으로 변환할 수 없음
    TypeMismatch,
    /// 선언된 제약 조건 위반 (열거형, 길이, 최솟값, 형식)
    ConstraintViolation,
}

/// 필드 하나에 대한 위반 레코드
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    /// 제약 코드 (`required`, `type`, `enum`, `length`, `min`, `date`, `email`, `non_empty`)
    pub constraint: &'static str,
    pub message: String,
}

impl Violation {
    pub fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: ViolationKind::MissingRequiredField,
            constraint: "required",
            message: format!("{} is required", field),
        }
    }

    pub fn type_mismatch(field: &str, expected: FieldKind) -> Self {
        Self {
            field: field.to_string(),
            kind: ViolationKind::TypeMismatch,
            constraint: "type",
            message: format!("{} must be {}", field, expected.describe()),
        }
    }

    pub fn constraint(field: &str, constraint: &Constraint, message: String) -> Self {
        Self {
            field: field.to_string(),
            kind: ViolationKind::ConstraintViolation,
            constraint: constraint.code(),
            message,
        }
    }
}

/// 한 번의 검증에서 수집된 전체 위반 목록 (선언 순서 유지)
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field violation(s): {}", .violations.len(), join_messages(.violations))]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// 특정 필드의 위반만 조회
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// 특정 필드에 특정 분류의 위반이 있는지 확인
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.for_field(field).any(|v| v.kind == kind)
    }
}
