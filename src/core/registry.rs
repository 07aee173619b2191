//! # Schema Registry
//!
//! 모든 요청 스키마를 프로세스 시작 시 한 번 구성하는 전역 레지스트리입니다.
//!
//! 각 DTO 모듈은 `inventory::submit!`으로 [`SchemaRegistration`]을 제출하고,
//! 레지스트리는 첫 접근 시점(`once_cell::sync::Lazy`)에 제출된 모든 정의를 빌드합니다.
//! 빌드 이후 스키마는 불변이며 모든 워커가 잠금 없이 공유합니다.
//!
//! ```text
//! dto/*.rs ── inventory::submit!(SchemaRegistration) ──┐
//!                                                      ▼
//!                          SCHEMA_REGISTRY: Lazy<SchemaRegistry>
//!                                                      │
//!                    handlers / Validated<T> ── get(name) ─┘
//! ```
//!
//! ## 등록 예제
//!
//! ```rust,ignore
//! fn verify_2fa_schema() -> Result<Schema, SchemaDefinitionError> {
//!     Schema::builder("Verify2FA")
//!         .field(FieldRule::string("code").required().exact_length(6))
//!         .build()
//! }
//!
//! inventory::submit! {
//!     SchemaRegistration { name: "Verify2FA", build: verify_2fa_schema }
//! }
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::schema::{Schema, SchemaDefinitionError};
use crate::utils::display_terminal::{print_boxed_title, print_registry_summary, print_schema_line};

/// 스키마 등록 정보
///
/// `inventory` 크레이트를 통해 컴파일 타임에 수집됩니다.
pub struct SchemaRegistration {
    /// 스키마의 고유 이름 (조회 키)
    pub name: &'static str,
    /// 스키마 생성 함수 (레지스트리 초기화 시 한 번 호출)
    pub build: fn() -> Result<Schema, SchemaDefinitionError>,
}

inventory::collect!(SchemaRegistration);

/// 불변 스키마 레지스트리
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Schema>,
}

static SCHEMA_REGISTRY: Lazy<SchemaRegistry> =
    Lazy::new(|| SchemaRegistry::from_registrations(inventory::iter::<SchemaRegistration>()));

impl SchemaRegistry {
    /// 전역 레지스트리 인스턴스
    pub fn global() -> &'static SchemaRegistry {
        &SCHEMA_REGISTRY
    }

    /// 등록 정보 목록으로 레지스트리를 구성합니다.
    ///
    /// 빌드에 실패한 정의, 이름이 어긋난 정의, 중복 등록은 로그를 남기고 제외합니다.
    pub fn from_registrations<'a, I>(registrations: I) -> Self
    where
        I: IntoIterator<Item = &'a SchemaRegistration>,
    {
        let mut schemas = HashMap::new();

        for registration in registrations {
            let schema = match (registration.build)() {
                Ok(schema) => schema,
                Err(e) => {
                    log::error!("스키마 {} 정의 오류: {}", registration.name, e);
                    continue;
                }
            };

            if schema.name() != registration.name {
                log::error!(
                    "스키마 등록 이름 불일치: 등록 {} / 정의 {}",
                    registration.name,
                    schema.name()
                );
                continue;
            }

            if schemas.contains_key(registration.name) {
                log::error!("스키마 {} 가 중복 등록되었습니다", registration.name);
                continue;
            }

            schemas.insert(registration.name, schema);
        }

        Self { schemas }
    }

    /// 레지스트리를 강제로 초기화하고 등록 현황을 출력합니다.
    ///
    /// 서버 시작 시 한 번 호출하여 정의 오류를 첫 요청 전에 드러냅니다.
    pub fn initialize() -> &'static SchemaRegistry {
        let registry = Self::global();

        print_boxed_title("Request Schema Registry");
        for schema in registry.schemas() {
            print_schema_line(schema.name(), schema.fields().len(), schema.required_fields().count());
        }
        print_registry_summary(registry.len());

        log::info!("✅ 요청 스키마 {}개 등록 완료", registry.len());
        registry
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// 이름순으로 정렬된 스키마 이름
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// 이름순으로 정렬된 스키마 목록
    pub fn schemas(&self) -> Vec<&Schema> {
        let mut schemas: Vec<_> = self.schemas.values().collect();
        schemas.sort_unstable_by_key(|schema| schema.name());
        schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
