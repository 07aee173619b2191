//! # Schema HTTP Handlers
//!
//! 등록된 검증 스키마를 조회하고, 임의의 JSON 페이로드를 이름으로 지정한 스키마에
//! 대해 검증하는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/schemas` | 전체 스키마 목록 | 200 OK |
//! | `GET` | `/api/v1/schemas/{name}` | 스키마 상세 | 200 OK / 404 |
//! | `POST` | `/api/v1/schemas/{name}/validate` | 페이로드 검증 | 200 OK / 400 / 404 |

use actix_web::{get, post, web, HttpResponse};
use serde_json::{json, Map, Value};

use crate::core::errors::AppError;
use crate::core::registry::SchemaRegistry;
use crate::domain::schema::Schema;

fn find_schema(name: &str) -> Result<&'static Schema, AppError> {
    SchemaRegistry::global()
        .get(name)
        .ok_or_else(|| AppError::NotFound(format!("스키마를 찾을 수 없습니다: {}", name)))
}

/// 등록된 모든 스키마 (이름순)
///
/// ```bash
/// curl http://localhost:8080/api/v1/schemas
/// ```
#[get("")]
pub async fn list_schemas() -> HttpResponse {
    let schemas = SchemaRegistry::global().schemas();

    HttpResponse::Ok().json(json!({
        "count": schemas.len(),
        "schemas": schemas,
    }))
}

/// 스키마 하나의 필드, 타입, 제약조건
#[get("/{name}")]
pub async fn get_schema(name: web::Path<String>) -> Result<HttpResponse, AppError> {
    let schema = find_schema(&name)?;
    Ok(HttpResponse::Ok().json(schema))
}

/// 페이로드를 스키마로 검증하고 정규화된 레코드를 반환합니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 등록되지 않은 스키마
/// * `AppError::ValidationFailed` - 필드 위반 (모든 위반을 한 번에 반환)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/schemas/AddPayment/validate \
///   -H "Content-Type: application/json" \
///   -d '{"amount":"25000","method":"CASH"}'
/// ```
///
/// Response:
/// ```json
/// { "schema": "AddPayment", "data": { "amount": 25000.0, "method": "CASH" } }
/// ```
#[post("/{name}/validate")]
pub async fn validate_payload(
    name: web::Path<String>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let schema = find_schema(&name)?;
    let record = schema.validate(&payload)?;

    log::debug!("{} 검증 통과: {}개 필드", schema.name(), record.len());

    Ok(HttpResponse::Ok().json(json!({
        "schema": record.schema(),
        "data": record,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    macro_rules! schema_app {
        () => {
            test::init_service(
                App::new().app_data(json_config()).service(
                    web::scope("/api/v1/schemas")
                        .service(list_schemas)
                        .service(get_schema)
                        .service(validate_payload),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_schemas_is_sorted() {
        let app = schema_app!();
        let req = test::TestRequest::get().uri("/api/v1/schemas").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["count"], 7);
        assert_eq!(body["schemas"][0]["name"], "AddPayment");
        assert_eq!(body["schemas"][6]["name"], "Verify2FA");
    }

    #[actix_web::test]
    async fn test_get_schema_and_unknown_schema() {
        let app = schema_app!();

        let req = test::TestRequest::get().uri("/api/v1/schemas/Verify2FA").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "Verify2FA");
        assert_eq!(body["fields"][0]["name"], "code");

        let req = test::TestRequest::get().uri("/api/v1/schemas/Refund").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_validate_returns_normalized_record() {
        let app = schema_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/schemas/AddPayment/validate")
            .set_json(json!({ "amount": "25000", "method": "CARD", "extra": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["schema"], "AddPayment");
        assert_eq!(body["data"]["amount"], 25000.0);
        assert_eq!(body["data"]["method"], "CARD");
        assert!(body["data"].get("extra").is_none());
    }

    #[actix_web::test]
    async fn test_validate_reports_violations() {
        let app = schema_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/schemas/ReviewTimeOff/validate")
            .set_json(json!({ "action": "MAYBE" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["violations"][0]["field"], "action");
        assert_eq!(body["violations"][0]["constraint"], "enum");
    }

    #[actix_web::test]
    async fn test_validate_unknown_schema() {
        let app = schema_app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/schemas/Refund/validate")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
