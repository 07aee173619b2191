//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 로케일 미들웨어 (LocaleMiddleware)
//! - 경로 접두사(`/en/...`) 또는 `Accept-Language` 헤더로 로케일 결정
//! - 접두사 전략(`always`, `as-needed`, `never`)에 따른 307 리다이렉트
//! - 접두사를 제거한 경로로 내부 재작성
//! - 결정된 로케일을 request extension과 `Content-Language` 헤더에 기록
//! - `/api`, `/health`, 정적 파일 경로는 건너뜀
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::config::LocaleConfig;
//! use crate::middlewares::LocaleMiddleware;
//!
//! let locale_config = LocaleConfig::from_env();
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(LocaleMiddleware::new(locale_config.clone()))
//!         .service(/* 라우트들 */)
//! })
//! ```
//!
//! 핸들러에서는 [`RequestLocale`] 추출기로 로케일을 받습니다.

pub mod locale_middleware;
mod locale_inner;
pub mod locale_resolver;

// 미들웨어 재export
pub use locale_middleware::LocaleMiddleware;
pub use locale_resolver::{negotiate, resolve, LocaleDecision, RequestLocale};
