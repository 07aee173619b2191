//! # Application Error Handling System
//!
//! 스키마 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 `?`로 반환한 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationFailed` | 400 Bad Request | 스키마 검증 실패 (위반 목록 포함) |
//! | `BadRequest` | 400 Bad Request | JSON 파싱 실패, 객체가 아닌 본문 |
//! | `NotFound` | 404 Not Found | 등록되지 않은 스키마 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 검증 실패 응답 예제
//!
//! ```json
//! {
//!   "error": "validation_failed",
//!   "message": "1 field violation(s): amount must not be less than 1",
//!   "violations": [
//!     {
//!       "field": "amount",
//!       "kind": "constraint_violation",
//!       "constraint": "min",
//!       "message": "amount must not be less than 1"
//!     }
//!   ]
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::domain::schema::ValidationErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 스키마 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    /// 요청 형식 오류 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 쓰이는 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationFailed(_) => "validation_failed",
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationFailed(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러 타입을 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationFailed(errors) => json!({
                "error": self.code(),
                "message": errors.to_string(),
                "violations": errors,
            }),
            AppError::InternalError(msg) => {
                log::error!("내부 오류: {}", msg);
                json!({
                    "error": self.code(),
                    "message": "Internal server error",
                })
            }
            _ => json!({
                "error": self.code(),
                "message": self.to_string(),
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Violation;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::from(ValidationErrors::new(vec![Violation::missing("email")]));
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validation_error_body_lists_violations() {
        let error = AppError::from(ValidationErrors::new(vec![Violation::missing("email")]));
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "validation_failed");
        assert_eq!(json["violations"][0]["field"], "email");
        assert_eq!(json["violations"][0]["kind"], "missing_required_field");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("schema `Unknown`".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("expected a JSON object".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::InternalError("secret detail".to_string());
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("secret detail"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
