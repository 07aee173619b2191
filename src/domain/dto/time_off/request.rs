//! 휴가 신청/검토 요청 DTO
//!
//! 검토 액션(`APPROVE`/`REJECT`)은 저장소 계층의 휴가 상태 열거형과 독립된
//! 두 값짜리 닫힌 집합입니다.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::registry::SchemaRegistration;
use crate::domain::dto::ValidatedRequest;
use crate::domain::schema::{FieldRule, Schema, SchemaDefinitionError};

/// 사유/메모 필드의 최대 길이 (문자 수)
pub const TIME_OFF_TEXT_MAX_LENGTH: u64 = 500;

/// 휴가 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOffType {
    Annual,
    Sick,
    Personal,
    Unpaid,
}

impl TimeOffType {
    pub const VALUES: &'static [&'static str] = &["ANNUAL", "SICK", "PERSONAL", "UNPAID"];
}

/// 휴가 검토 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub const VALUES: &'static [&'static str] = &["APPROVE", "REJECT"];
}

/// 휴가 신청 요청
///
/// ```json
/// { "type": "ANNUAL", "startDate": "2024-07-01", "endDate": "2024-07-05", "reason": "family visit" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeOffRequest {
    #[serde(rename = "type")]
    pub time_off_type: TimeOffType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

impl ValidatedRequest for CreateTimeOffRequest {
    const SCHEMA: &'static str = "CreateTimeOff";
}

/// 휴가 신청 검토 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTimeOffRequest {
    pub action: ReviewAction,
    pub notes: Option<String>,
}

impl ValidatedRequest for ReviewTimeOffRequest {
    const SCHEMA: &'static str = "ReviewTimeOff";
}

pub fn create_time_off_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("CreateTimeOff")
        .field(FieldRule::one_of("type", TimeOffType::VALUES).required())
        .field(FieldRule::date("startDate").required())
        .field(FieldRule::date("endDate").required())
        .field(FieldRule::string("reason").max_length(TIME_OFF_TEXT_MAX_LENGTH))
        .build()
}

pub fn review_time_off_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("ReviewTimeOff")
        .field(FieldRule::one_of("action", ReviewAction::VALUES).required())
        .field(FieldRule::string("notes").max_length(TIME_OFF_TEXT_MAX_LENGTH))
        .build()
}

inventory::submit! {
    SchemaRegistration { name: "CreateTimeOff", build: create_time_off_schema }
}

inventory::submit! {
    SchemaRegistration { name: "ReviewTimeOff", build: review_time_off_schema }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ViolationKind;
    use serde_json::{json, Map, Value};

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn time_off(reason: &str) -> Map<String, Value> {
        payload(json!({
            "type": "SICK",
            "startDate": "2024-07-01",
            "endDate": "2024-07-02",
            "reason": reason,
        }))
    }

    #[test]
    fn test_reason_of_500_characters_is_valid() {
        let request = CreateTimeOffRequest::from_payload(&time_off(&"a".repeat(500))).unwrap();

        assert_eq!(request.time_off_type, TimeOffType::Sick);
        assert_eq!(request.reason.map(|r| r.len()), Some(500));
    }

    #[test]
    fn test_reason_of_501_characters_is_rejected() {
        let errors = create_time_off_schema()
            .unwrap()
            .validate(&time_off(&"a".repeat(501)))
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.has("reason", ViolationKind::ConstraintViolation));
        assert_eq!(errors.violations()[0].constraint, "length");
    }

    #[test]
    fn test_create_time_off_requires_type_and_dates() {
        let errors = create_time_off_schema()
            .unwrap()
            .validate(&payload(json!({ "reason": "trip" })))
            .unwrap_err();

        for field in ["type", "startDate", "endDate"] {
            assert!(errors.has(field, ViolationKind::MissingRequiredField), "{field}");
        }
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_review_action_approve_is_valid() {
        let request =
            ReviewTimeOffRequest::from_payload(&payload(json!({ "action": "APPROVE" }))).unwrap();

        assert_eq!(request.action, ReviewAction::Approve);
        assert_eq!(request.notes, None);
    }

    #[test]
    fn test_review_action_maybe_is_rejected() {
        let errors = review_time_off_schema()
            .unwrap()
            .validate(&payload(json!({ "action": "MAYBE" })))
            .unwrap_err();

        assert!(errors.has("action", ViolationKind::ConstraintViolation));
        assert_eq!(errors.violations()[0].constraint, "enum");
    }

    #[test]
    fn test_enum_values_match_serde_names() {
        for value in TimeOffType::VALUES {
            assert!(serde_json::from_value::<TimeOffType>(json!(value)).is_ok(), "{value}");
        }
        for value in ReviewAction::VALUES {
            assert!(serde_json::from_value::<ReviewAction>(json!(value)).is_ok(), "{value}");
        }
    }
}
