//! 정규화된 검증 결과
//!
//! 검증에 성공한 페이로드는 선언된 필드만, 선언 순서대로, 변환된 타입으로 담긴
//! [`NormalizedRecord`]가 됩니다. 타입이 있는 DTO가 필요하면 [`NormalizedRecord::into_dto`]를 사용합니다.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::errors::{AppResult, ErrorContext};

/// 변환이 끝난 필드 값
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Enum(String),
    /// `YYYY-MM-DD`로 직렬화
    Date(NaiveDate),
}

impl FieldValue {
    /// 문자열 계열 값(Text, Enum)의 참조
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// 검증을 통과한 정규화 레코드
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    schema: &'static str,
    fields: Vec<(&'static str, FieldValue)>,
}

impl NormalizedRecord {
    pub(crate) fn new(schema: &'static str, fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { schema, fields }
    }

    /// 레코드를 만든 스키마 이름
    pub fn schema(&self) -> &'static str {
        self.schema
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// 레코드를 타입이 있는 DTO로 변환합니다.
    ///
    /// 선택 필드가 레코드에 없으면 DTO의 `Option` 필드는 `None`이 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - DTO 정의가 스키마와 맞지 않는 경우
    pub fn into_dto<T: DeserializeOwned>(self) -> AppResult<T> {
        let schema = self.schema;
        let value = serde_json::to_value(&self).context("정규화 레코드 직렬화 실패")?;
        serde_json::from_value(value)
            .with_context(|| format!("{} 스키마 레코드를 DTO로 변환하지 못했습니다", schema))
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        amount: f64,
        start_date: NaiveDate,
        notes: Option<String>,
    }

    fn sample_record() -> NormalizedRecord {
        NormalizedRecord::new(
            "Sample",
            vec![
                ("amount", FieldValue::Number(25000.0)),
                ("startDate", FieldValue::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())),
            ],
        )
    }

    #[test]
    fn test_serializes_in_declaration_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();

        assert_eq!(json, r#"{"amount":25000.0,"startDate":"2024-05-01"}"#);
    }

    #[test]
    fn test_into_dto_fills_missing_optionals_with_none() {
        let dto: Sample = sample_record().into_dto().unwrap();

        assert_eq!(
            dto,
            Sample {
                amount: 25000.0,
                start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                notes: None,
            }
        );
    }

    #[test]
    fn test_get_and_accessors() {
        let record = sample_record();

        assert_eq!(record.schema(), "Sample");
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("amount").and_then(FieldValue::as_f64), Some(25000.0));
        assert!(record.get("amount").and_then(FieldValue::as_str).is_none());
        assert!(!record.contains("notes"));
    }
}
