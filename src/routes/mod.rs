//! API 라우트 설정 모듈
//!
//! 스키마 API, 로케일 인덱스, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 로케일 협상 |
//! |--------|------|-------------|
//! | `GET` | `/health` | 제외 |
//! | `GET` | `/`, `/{locale}` | 적용 |
//! | `GET` | `/api/v1/schemas` | 제외 |
//! | `GET` | `/api/v1/schemas/{name}` | 제외 |
//! | `POST` | `/api/v1/schemas/{name}/validate` | 제외 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    // Locale-aware pages
    cfg.service(handlers::index::index);

    configure_schema_routes(cfg);
}

/// JSON 본문 파싱 설정
///
/// 잘못된 JSON, 객체가 아닌 본문은 `AppError::BadRequest` 형식의 400 응답이 됩니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::BadRequest(format!("잘못된 JSON 본문: {}", err)).into()
    })
}

/// 스키마 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/schemas` - 등록된 스키마 목록
/// - `GET /api/v1/schemas/{name}` - 스키마 상세
/// - `POST /api/v1/schemas/{name}/validate` - 페이로드 검증
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/schemas/Verify2FA/validate \
///   -H "Content-Type: application/json" \
///   -d '{"code":"123456"}'
/// ```
fn configure_schema_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schemas")
            .service(handlers::schemas::list_schemas)
            .service(handlers::schemas::get_schema)
            .service(handlers::schemas::validate_payload)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "clinic_schema_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "schemas": 7
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "clinic_schema_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "schemas": crate::core::registry::SchemaRegistry::global().len(),
    }))
}
