//! 인증 요청관련 DTO
//!
//! 로그인과 2단계 인증 코드 확인 요청의 형태만 정의합니다.
//! 자격 증명 확인 자체는 인증 서비스의 책임입니다.
use serde::{Deserialize, Serialize};

use crate::core::registry::SchemaRegistration;
use crate::domain::dto::ValidatedRequest;
use crate::domain::schema::{FieldRule, Schema, SchemaDefinitionError};

/// 2단계 인증 코드 길이
pub const TWO_FACTOR_CODE_LENGTH: u64 = 6;

/// 로컬 로그인 요청
///
/// ```json
/// { "email": "doctor@clinic.iq", "password": "password123", "twoFactorCode": "123456" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// 2단계 인증이 켜진 계정만 전달
    pub two_factor_code: Option<String>,
}

impl ValidatedRequest for LoginRequest {
    const SCHEMA: &'static str = "Login";
}

/// 2단계 인증 코드 확인 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verify2FARequest {
    pub code: String,
}

impl ValidatedRequest for Verify2FARequest {
    const SCHEMA: &'static str = "Verify2FA";
}

pub fn login_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("Login")
        .field(FieldRule::string("email").required().email())
        .field(FieldRule::string("password").required())
        .field(FieldRule::string("twoFactorCode"))
        .build()
}

pub fn verify_2fa_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("Verify2FA")
        .field(
            FieldRule::string("code")
                .required()
                .exact_length(TWO_FACTOR_CODE_LENGTH),
        )
        .build()
}

inventory::submit! {
    SchemaRegistration { name: "Login", build: login_schema }
}

inventory::submit! {
    SchemaRegistration { name: "Verify2FA", build: verify_2fa_schema }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ViolationKind;
    use serde_json::{json, Map, Value};

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_login_without_two_factor_code() {
        let request = LoginRequest::from_payload(&payload(json!({
            "email": "doctor@clinic.iq",
            "password": "password123",
        })))
        .unwrap();

        assert_eq!(request.email, "doctor@clinic.iq");
        assert_eq!(request.two_factor_code, None);
    }

    #[test]
    fn test_login_rejects_invalid_email() {
        let errors = login_schema()
            .unwrap()
            .validate(&payload(json!({ "email": "not-an-email", "password": "x" })))
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.violations()[0].constraint, "email");
    }

    #[test]
    fn test_login_missing_password_reported_with_other_errors() {
        let errors = login_schema()
            .unwrap()
            .validate(&payload(json!({ "email": "bad", "twoFactorCode": 123456 })))
            .unwrap_err();

        assert!(errors.has("email", ViolationKind::ConstraintViolation));
        assert!(errors.has("password", ViolationKind::MissingRequiredField));
        assert!(errors.has("twoFactorCode", ViolationKind::TypeMismatch));
    }

    #[test]
    fn test_verify_2fa_code_length() {
        let schema = verify_2fa_schema().unwrap();

        let short = schema.validate(&payload(json!({ "code": "12345" }))).unwrap_err();
        assert!(short.has("code", ViolationKind::ConstraintViolation));
        assert_eq!(short.violations()[0].constraint, "length");

        assert!(schema.validate(&payload(json!({ "code": "1234567" }))).is_err());

        let request = Verify2FARequest::from_payload(&payload(json!({ "code": "123456" }))).unwrap();
        assert_eq!(request.code, "123456");
    }
}
