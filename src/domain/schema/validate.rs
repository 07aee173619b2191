//! 스키마 검증 함수
//!
//! `validate(schema, payload)`는 입력만 사용하는 순수 함수입니다.
//! 모든 필드를 선언 순서대로 검사하고 모든 위반을 모은 뒤에 결과를 돌려주며,
//! 위반이 하나라도 있으면 부분 레코드는 반환하지 않습니다.
//!
//! ## 필드별 처리 순서
//!
//! 1. 필수 필드가 없거나 `null`/`""`이면 `MissingRequiredField`
//!    (선택 필드는 없거나 `null`이면 건너뜀)
//! 2. 선언된 타입으로 변환. 실패하면 `TypeMismatch` 후 해당 필드 검사 종료
//! 3. 선언된 제약을 모두 평가. 실패한 제약마다 `ConstraintViolation` 하나

use chrono::NaiveDate;
use serde_json::{Map, Value};
use validator::{ValidateEmail, ValidateLength};

use super::definition::Schema;
use super::record::{FieldValue, NormalizedRecord};
use super::rule::{Constraint, FieldKind, FieldRule};
use super::violation::{ValidationErrors, Violation};

impl Schema {
    /// 이 스키마로 페이로드를 검증합니다. [`validate`]와 같습니다.
    pub fn validate(&self, payload: &Map<String, Value>) -> Result<NormalizedRecord, ValidationErrors> {
        validate(self, payload)
    }
}

/// 원시 페이로드를 스키마로 검증합니다.
///
/// # Returns
///
/// * `Ok(NormalizedRecord)` - 위반이 없을 때. 선언된 필드만 포함
/// * `Err(ValidationErrors)` - 수집된 전체 위반 목록 (선언 순서)
///
/// # Examples
///
/// ```rust,ignore
/// let payload = serde_json::json!({ "amount": "25000", "method": "CASH" });
/// let record = validate(&schema, payload.as_object().unwrap())?;
/// assert_eq!(record.get("amount").and_then(FieldValue::as_f64), Some(25000.0));
/// ```
pub fn validate(schema: &Schema, payload: &Map<String, Value>) -> Result<NormalizedRecord, ValidationErrors> {
    let mut fields = Vec::with_capacity(schema.fields().len());
    let mut violations = Vec::new();

    for rule in schema.fields() {
        let raw = match payload.get(rule.name()) {
            None | Some(Value::Null) => {
                if rule.is_required() {
                    violations.push(Violation::missing(rule.name()));
                }
                continue;
            }
            Some(Value::String(s)) if s.is_empty() && rule.is_required() => {
                violations.push(Violation::missing(rule.name()));
                continue;
            }
            Some(raw) => raw,
        };

        let Some(value) = coerce(rule.kind(), raw) else {
            violations.push(Violation::type_mismatch(rule.name(), rule.kind()));
            continue;
        };

        let before = violations.len();
        for constraint in rule.constraints() {
            if let Some(message) = check(rule, constraint, &value) {
                violations.push(Violation::constraint(rule.name(), constraint, message));
            }
        }

        if violations.len() == before {
            fields.push((rule.name(), finalize(rule.kind(), value)));
        }
    }

    log::debug!(
        "스키마 {} 검증 완료: 필드 {}개, 위반 {}건",
        schema.name(),
        schema.fields().len(),
        violations.len()
    );

    if violations.is_empty() {
        Ok(NormalizedRecord::new(schema.name(), fields))
    } else {
        Err(ValidationErrors::new(violations))
    }
}

/// 원시 값을 필드 타입으로 변환 (날짜는 형식 검사 전까지 문자열로 유지)
fn coerce(kind: FieldKind, raw: &Value) -> Option<FieldValue> {
    match (kind, raw) {
        (FieldKind::String | FieldKind::DateString, Value::String(s)) => Some(FieldValue::Text(s.clone())),
        (FieldKind::Enum, Value::String(s)) => Some(FieldValue::Enum(s.clone())),
        (FieldKind::Number, Value::Number(n)) => n.as_f64().filter(|n| n.is_finite()).map(FieldValue::Number),
        (FieldKind::Number, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number),
        _ => None,
    }
}

/// 제약을 평가하고, 위반이면 메시지를 반환
fn check(rule: &FieldRule, constraint: &Constraint, value: &FieldValue) -> Option<String> {
    let field = rule.name();

    match constraint {
        Constraint::NonEmpty => {
            let text = value.as_str()?;
            text.trim().is_empty().then(|| format!("{} should not be empty", field))
        }
        Constraint::Email => {
            let text = value.as_str()?;
            (!text.validate_email()).then(|| format!("{} must be an email", field))
        }
        Constraint::Length { min, max } => {
            let text = value.as_str()?;
            if ValidateLength::<u64>::validate_length(&text, *min, *max, None) {
                return None;
            }
            Some(length_message(field, *min, *max))
        }
        Constraint::Min { value: bound } => {
            let number = value.as_f64()?;
            (number < *bound).then(|| format!("{} must not be less than {}", field, bound))
        }
        Constraint::OneOf { values } => {
            let text = value.as_str()?;
            (!values.contains(&text)).then(|| {
                format!(
                    "{} must be one of the following values: {}",
                    field,
                    values.join(", ")
                )
            })
        }
        Constraint::IsoDate => {
            let text = value.as_str()?;
            parse_iso_date(text)
                .is_none()
                .then(|| format!("{} must be a valid date string (YYYY-MM-DD)", field))
        }
    }
}

fn length_message(field: &str, min: Option<u64>, max: Option<u64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min == max => {
            format!("{} must be exactly {} characters long", field, min)
        }
        (Some(min), Some(max)) => {
            format!("{} must be between {} and {} characters long", field, min, max)
        }
        (Some(min), None) => format!("{} must be longer than or equal to {} characters", field, min),
        (None, Some(max)) => format!("{} must be shorter than or equal to {} characters", field, max),
        (None, None) => format!("{} has an invalid length", field),
    }
}

/// 제약을 통과한 값을 최종 타입으로 변환
fn finalize(kind: FieldKind, value: FieldValue) -> FieldValue {
    match (kind, value) {
        (FieldKind::DateString, FieldValue::Text(text)) => match parse_iso_date(&text) {
            Some(date) => FieldValue::Date(date),
            None => FieldValue::Text(text),
        },
        (_, value) => value,
    }
}

/// 엄격한 `YYYY-MM-DD` 파싱 (자리수 고정, 실제 달력 날짜)
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}
