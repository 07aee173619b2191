//! 근무 일정 조회 쿼리 DTO
//!
//! 모든 필드가 선택 사항인 조회 필터입니다. 쿼리 스트링으로 전달되므로
//! `ValidatedQuery<QuerySchedulesRequest>` 추출기와 함께 사용합니다.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::registry::SchemaRegistration;
use crate::domain::dto::ValidatedRequest;
use crate::domain::schema::{FieldRule, Schema, SchemaDefinitionError};

/// `GET /schedules?userId=&branchId=&startDate=&endDate=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySchedulesRequest {
    pub user_id: Option<String>,
    pub branch_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ValidatedRequest for QuerySchedulesRequest {
    const SCHEMA: &'static str = "QuerySchedules";
}

pub fn query_schedules_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("QuerySchedules")
        .field(FieldRule::string("userId"))
        .field(FieldRule::string("branchId"))
        .field(FieldRule::date("startDate"))
        .field(FieldRule::date("endDate"))
        .build()
}

inventory::submit! {
    SchemaRegistration { name: "QuerySchedules", build: query_schedules_schema }
}
