//! 서버 설정 관리 모듈
//!
//! 바인딩 주소, 워커 수, Rate Limiting, CORS 관련 설정을 환경 변수에서 읽습니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        parse_or("PORT", env::var("PORT").ok(), 8080)
    }

    /// HTTP 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        parse_or("WORKERS", env::var("WORKERS").ok(), 4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.prod (운영 환경)
    /// RATE_LIMIT_PER_SECOND=500
    /// RATE_LIMIT_BURST_SIZE=1000
    /// ```
    pub fn from_env() -> Self {
        let config = Self {
            per_second: parse_or(
                "RATE_LIMIT_PER_SECOND",
                env::var("RATE_LIMIT_PER_SECOND").ok(),
                100,
            ),
            burst_size: parse_or(
                "RATE_LIMIT_BURST_SIZE",
                env::var("RATE_LIMIT_BURST_SIZE").ok(),
                200,
            ),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분). 설정되지 않으면 로컬 프론트엔드 개발 서버만 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok())
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    }
}

/// 값을 파싱하고, 실패하면 로그를 남기고 기본값을 사용합니다.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}
