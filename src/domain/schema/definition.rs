//! 스키마 정의와 빌더
//!
//! 스키마는 필드 규칙의 순서 있는 집합입니다. 프로세스 시작 시 한 번 만들어지고
//! 이후에는 변경되지 않으므로 여러 워커 스레드가 동시에 읽어도 안전합니다.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use super::rule::FieldRule;

/// 스키마 정의 오류 (프로그래밍 오류로, 시작 시점에 보고됨)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaDefinitionError {
    #[error("schema name must not be empty")]
    EmptyName,

    #[error("schema `{schema}` declares field `{field}` more than once")]
    DuplicateField {
        schema: &'static str,
        field: &'static str,
    },
}

/// 요청 검증 스키마
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldRule>,
}

impl Schema {
    /// 새 스키마 빌더를 시작합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let schema = Schema::builder("Verify2FA")
    ///     .field(FieldRule::string("code").required().exact_length(6))
    ///     .build()?;
    /// ```
    pub fn builder(name: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            name,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 선언 순서대로의 필드 규칙
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name() == name)
    }

    /// 필수 필드 이름 목록
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|rule| rule.is_required())
            .map(FieldRule::name)
    }
}

/// [`Schema`] 빌더
pub struct SchemaBuilder {
    name: &'static str,
    fields: Vec<FieldRule>,
}

impl SchemaBuilder {
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// 필드 이름 유일성을 확인하고 스키마를 완성합니다.
    pub fn build(self) -> Result<Schema, SchemaDefinitionError> {
        if self.name.trim().is_empty() {
            return Err(SchemaDefinitionError::EmptyName);
        }

        let mut seen = HashSet::new();
        for rule in &self.fields {
            if !seen.insert(rule.name()) {
                return Err(SchemaDefinitionError::DuplicateField {
                    schema: self.name,
                    field: rule.name(),
                });
            }
        }

        Ok(Schema {
            name: self.name,
            fields: self.fields,
        })
    }
}
