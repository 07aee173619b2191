//! 청구서 결제 추가 요청 DTO
use serde::{Deserialize, Serialize};

use crate::core::registry::SchemaRegistration;
use crate::domain::dto::ValidatedRequest;
use crate::domain::schema::{FieldRule, Schema, SchemaDefinitionError};

/// 결제 수단
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    Insurance,
}

impl PaymentMethod {
    pub const VALUES: &'static [&'static str] = &["CASH", "CARD", "BANK_TRANSFER", "INSURANCE"];
}

/// 청구서에 결제를 추가하는 요청
///
/// 금액은 문자열로 와도 숫자로 변환됩니다 (`"25000"` → `25000`).
///
/// ```json
/// { "amount": 25000, "method": "CASH", "reference": "RCPT-0042", "notes": "first installment" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPaymentRequest {
    /// 결제 금액 (최소 1)
    pub amount: f64,
    pub method: PaymentMethod,
    /// 영수증 번호 등 외부 참조
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl ValidatedRequest for AddPaymentRequest {
    const SCHEMA: &'static str = "AddPayment";
}

pub fn add_payment_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("AddPayment")
        .field(FieldRule::number("amount").required().min(1.0))
        .field(FieldRule::one_of("method", PaymentMethod::VALUES).required())
        .field(FieldRule::string("reference"))
        .field(FieldRule::string("notes"))
        .build()
}

inventory::submit! {
    SchemaRegistration { name: "AddPayment", build: add_payment_schema }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{FieldValue, ViolationKind};
    use serde_json::{json, Map, Value};

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_amount_zero_violates_minimum() {
        let errors = add_payment_schema()
            .unwrap()
            .validate(&payload(json!({ "amount": 0, "method": "CASH" })))
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.has("amount", ViolationKind::ConstraintViolation));
        assert_eq!(errors.violations()[0].constraint, "min");
    }

    #[test]
    fn test_amount_one_is_valid() {
        let request = AddPaymentRequest::from_payload(&payload(json!({ "amount": 1, "method": "CARD" })))
            .unwrap();

        assert_eq!(request.amount, 1.0);
        assert_eq!(request.method, PaymentMethod::Card);
    }

    #[test]
    fn test_string_amount_is_coerced() {
        let record = add_payment_schema()
            .unwrap()
            .validate(&payload(json!({ "amount": "25000", "method": "BANK_TRANSFER" })))
            .unwrap();

        assert_eq!(record.get("amount"), Some(&FieldValue::Number(25000.0)));
    }

    #[test]
    fn test_optional_fields_are_carried_through() {
        let request = AddPaymentRequest::from_payload(&payload(json!({
            "amount": 150.5,
            "method": "INSURANCE",
            "reference": "RCPT-0042",
            "notes": null,
        })))
        .unwrap();

        assert_eq!(request.reference.as_deref(), Some("RCPT-0042"));
        assert_eq!(request.notes, None);
    }

    #[test]
    fn test_every_payment_method_is_accepted_and_others_rejected() {
        let schema = add_payment_schema().unwrap();
        for method in PaymentMethod::VALUES {
            let request =
                AddPaymentRequest::from_payload(&payload(json!({ "amount": 10, "method": method })));
            assert!(request.is_ok(), "{method}");
        }

        let errors = schema
            .validate(&payload(json!({ "amount": 10, "method": "BITCOIN" })))
            .unwrap_err();
        assert!(errors.has("method", ViolationKind::ConstraintViolation));
    }
}
