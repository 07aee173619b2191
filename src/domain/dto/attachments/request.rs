//! 첨부 파일 업로드 요청 DTO
//!
//! 파일 본문은 multipart로 전달되며, 이 DTO는 첨부 대상 엔티티를 지정하는
//! 폼 필드만 다룹니다.
use serde::{Deserialize, Serialize};

use crate::core::registry::SchemaRegistration;
use crate::domain::dto::ValidatedRequest;
use crate::domain::schema::{FieldRule, Schema, SchemaDefinitionError};

/// 첨부 파일을 연결할 수 있는 엔티티 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentEntityType {
    Patient,
    Appointment,
    Invoice,
    MedicalRecord,
    Employee,
}

impl AttachmentEntityType {
    pub const VALUES: &'static [&'static str] =
        &["PATIENT", "APPOINTMENT", "INVOICE", "MEDICAL_RECORD", "EMPLOYEE"];
}

/// 첨부 파일 업로드 요청
///
/// ```json
/// { "entityType": "PATIENT", "entityId": "clx1a2b3c0000abcd" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAttachmentRequest {
    pub entity_type: AttachmentEntityType,
    pub entity_id: String,
}

impl ValidatedRequest for UploadAttachmentRequest {
    const SCHEMA: &'static str = "UploadAttachment";
}

pub fn upload_attachment_schema() -> Result<Schema, SchemaDefinitionError> {
    Schema::builder("UploadAttachment")
        .field(FieldRule::one_of("entityType", AttachmentEntityType::VALUES).required())
        .field(FieldRule::string("entityId").required().non_empty())
        .build()
}

inventory::submit! {
    SchemaRegistration { name: "UploadAttachment", build: upload_attachment_schema }
}
