//! 필드 규칙 정의
//!
//! 스키마를 구성하는 필드 단위 규칙(원시 타입, 필수 여부, 제약 조건)을 정의합니다.
//! 데코레이터 메타데이터 대신 명시적인 값 객체로 규칙을 선언하므로,
//! 규칙 자체를 테스트하고 직렬화(스키마 조회 API)할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::schema::FieldRule;
//!
//! let amount = FieldRule::number("amount").required().min(1.0);
//! let code = FieldRule::string("code").required().exact_length(6);
//! let action = FieldRule::one_of("action", &["APPROVE", "REJECT"]).required();
//! ```

use serde::Serialize;

/// 필드의 원시 타입 (강제 변환 규칙을 결정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// JSON 문자열만 허용
    String,
    /// JSON 숫자 또는 숫자로 해석 가능한 문자열
    Number,
    /// 닫힌 집합의 심볼 상수 (문자열)
    Enum,
    /// `YYYY-MM-DD` 형식의 달력 날짜 문자열
    DateString,
}

impl FieldKind {
    /// 타입 불일치 메시지에 쓰이는 사람이 읽을 수 있는 이름
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
            FieldKind::Enum => "a string",
            FieldKind::DateString => "a date string",
        }
    }
}

/// 필드에 선언된 제약 조건
///
/// 강제 변환에 성공한 값에 대해서만 평가되며,
/// 실패한 제약 하나당 위반 레코드 하나가 생성됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// 공백만으로 이루어진 문자열 금지
    NonEmpty,
    /// 이메일 형식
    Email,
    /// 문자 수 범위 (유니코드 문자 기준, 양 끝 포함)
    Length { min: Option<u64>, max: Option<u64> },
    /// 숫자 최솟값 (포함)
    Min { value: f64 },
    /// 닫힌 집합 멤버십
    OneOf { values: &'static [&'static str] },
    /// `YYYY-MM-DD` 달력 날짜
    IsoDate,
}

impl Constraint {
    /// 위반 레코드에 기록되는 제약 코드
    pub fn code(&self) -> &'static str {
        match self {
            Constraint::NonEmpty => "non_empty",
            Constraint::Email => "email",
            Constraint::Length { .. } => "length",
            Constraint::Min { .. } => "min",
            Constraint::OneOf { .. } => "enum",
            Constraint::IsoDate => "date",
        }
    }
}

/// 스키마의 필드 하나에 대한 검증 규칙
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRule {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    constraints: Vec<Constraint>,
}

impl FieldRule {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            constraints: Vec::new(),
        }
    }

    /// 문자열 필드
    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// 숫자 필드 (문자열 입력도 숫자로 변환)
    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// 열거형 필드. 멤버십 제약이 자동으로 추가됩니다.
    pub fn one_of(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Enum).with(Constraint::OneOf { values })
    }

    /// 날짜 문자열 필드. `YYYY-MM-DD` 형식 제약이 자동으로 추가됩니다.
    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateString).with(Constraint::IsoDate)
    }

    /// 필수 필드로 지정
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn non_empty(self) -> Self {
        self.with(Constraint::NonEmpty)
    }

    pub fn email(self) -> Self {
        self.with(Constraint::Email)
    }

    pub fn length(self, min: Option<u64>, max: Option<u64>) -> Self {
        self.with(Constraint::Length { min, max })
    }

    pub fn exact_length(self, len: u64) -> Self {
        self.length(Some(len), Some(len))
    }

    pub fn max_length(self, max: u64) -> Self {
        self.length(None, Some(max))
    }

    pub fn min(self, value: f64) -> Self {
        self.with(Constraint::Min { value })
    }

    /// 임의의 제약 조건 추가
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}
