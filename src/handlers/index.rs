//! 로케일 라우팅이 적용되는 인덱스 페이지
use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::config::SUPPORTED_LOCALES;
use crate::core::registry::SchemaRegistry;
use crate::middlewares::RequestLocale;

/// 서비스 개요와 요청 로케일
///
/// `/`, `/en`, `/ckb`, `/kmr` 모두 이 핸들러로 들어옵니다 (로케일 접두사는 미들웨어가 제거).
///
/// ```json
/// {
///   "service": "clinic_schema_service",
///   "version": "0.1.0",
///   "locale": "ckb",
///   "locales": ["ar", "en", "ckb", "kmr"],
///   "schemas": ["AddPayment", "CreateTimeOff", "..."]
/// }
/// ```
#[get("/")]
pub async fn index(locale: RequestLocale) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "locale": locale.as_str(),
        "locales": SUPPORTED_LOCALES,
        "schemas": SchemaRegistry::global().names(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::LocaleMiddleware;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_index_reports_prefixed_locale() {
        let app = test::init_service(App::new().wrap(LocaleMiddleware::default()).service(index)).await;

        let req = test::TestRequest::get().uri("/ckb").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["locale"], "ckb");
        assert_eq!(body["locales"][0], "ar");
        assert_eq!(body["schemas"].as_array().map(Vec::len), Some(7));
    }

    #[actix_web::test]
    async fn test_index_without_middleware_uses_default_locale() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ACCEPT_LANGUAGE, "en"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["locale"], "ar");
    }
}
