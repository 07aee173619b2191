//! # Configuration Module
//!
//! 스키마 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 서버 바인딩, 워커, Rate Limiting, CORS 설정
//! - [`locale_config`] - 지원 로케일, 기본 로케일, 경로 매처, 접두사 전략
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="https://clinic.example.com,https://admin.clinic.example.com"
//!
//! # 로케일
//! export DEFAULT_LOCALE="ar"        # ar, en, ckb, kmr
//! export LOCALE_PREFIX="as-needed"  # always, as-needed, never
//! ```
//!
//! `PROFILE=dev|prod` 에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.

pub mod locale_config;
pub mod server_config;

pub use locale_config::*;
pub use server_config::*;
