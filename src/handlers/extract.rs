//! 스키마 검증 추출기
//!
//! 핸들러 인자로 선언하면 등록된 스키마로 요청을 검증한 뒤 타입 있는 DTO를 넘겨줍니다.
//!
//! ```rust,ignore
//! #[post("/{invoice_id}/payments")]
//! pub async fn add_payment(
//!     invoice_id: web::Path<String>,
//!     payment: Validated<AddPaymentRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let payment = payment.into_inner();
//!     // payment.amount >= 1 이 보장됨
//!     Ok(HttpResponse::Created().json(payment))
//! }
//! ```
//!
//! 검증 실패는 `AppError::ValidationFailed` 로 전파되어 400 응답이 됩니다.

use std::collections::HashMap;
use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde_json::{Map, Value};

use crate::core::errors::AppError;
use crate::domain::dto::ValidatedRequest;

/// JSON 본문을 스키마로 검증한 DTO
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: ValidatedRequest + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // 본문 파싱 실패는 JsonConfig 에러 핸들러를 따름
        let body = web::Json::<Map<String, Value>>::from_request(req, payload);

        Box::pin(async move {
            let web::Json(body) = body.await?;
            let dto = T::from_payload(&body)?;
            Ok(Validated(dto))
        })
    }
}

/// 쿼리 문자열을 스키마로 검증한 DTO
///
/// 쿼리 값은 모두 문자열로 들어오며, 숫자 필드는 스키마의 변환 규칙을 따릅니다.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: ValidatedRequest,
{
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(query_to_dto(req.query_string()).map(ValidatedQuery).map_err(Into::into))
    }
}

fn query_to_dto<T: ValidatedRequest>(query: &str) -> Result<T, AppError> {
    let params = web::Query::<HashMap<String, String>>::from_query(query)
        .map_err(|e| AppError::BadRequest(format!("잘못된 쿼리 문자열: {}", e)))?
        .into_inner();

    let payload: Map<String, Value> = params
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    T::from_payload(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::{AddPaymentRequest, PaymentMethod, QuerySchedulesRequest};
    use crate::routes::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpResponse};
    use chrono::NaiveDate;

    async fn add_payment(payment: Validated<AddPaymentRequest>) -> HttpResponse {
        HttpResponse::Created().json(payment.into_inner())
    }

    async fn query_schedules(query: ValidatedQuery<QuerySchedulesRequest>) -> HttpResponse {
        HttpResponse::Ok().json(query.into_inner())
    }

    #[actix_web::test]
    async fn test_validated_body_coerces_amount() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/payments", web::post().to(add_payment)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/payments")
            .set_json(serde_json::json!({ "amount": "25000", "method": "CASH" }))
            .to_request();
        let body: AddPaymentRequest = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.amount, 25000.0);
        assert_eq!(body.method, PaymentMethod::Cash);
        assert_eq!(body.reference, None);
    }

    #[actix_web::test]
    async fn test_validated_body_rejects_with_all_violations() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/payments", web::post().to(add_payment)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/payments")
            .set_json(serde_json::json!({ "amount": 0, "method": "CHEQUE" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["violations"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["violations"][0]["field"], "amount");
        assert_eq!(body["violations"][0]["constraint"], "min");
        assert_eq!(body["violations"][1]["field"], "method");
    }

    #[actix_web::test]
    async fn test_validated_body_rejects_non_object_json() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/payments", web::post().to(add_payment)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/payments")
            .set_json(serde_json::json!([1, 2, 3]))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "bad_request");
    }

    #[actix_web::test]
    async fn test_validated_query_parses_dates() {
        let app = test::init_service(
            App::new().route("/schedules", web::get().to(query_schedules)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/schedules?userId=u-1&startDate=2024-06-01")
            .to_request();
        let body: QuerySchedulesRequest = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.user_id.as_deref(), Some("u-1"));
        assert_eq!(body.start_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(body.end_date, None);
    }

    #[actix_web::test]
    async fn test_validated_query_rejects_bad_date() {
        let app = test::init_service(
            App::new().route("/schedules", web::get().to(query_schedules)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/schedules?endDate=2024-02-30")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_query_to_dto_without_params() {
        let dto: QuerySchedulesRequest = query_to_dto("").unwrap();
        assert_eq!(dto, QuerySchedulesRequest::default());
    }
}
