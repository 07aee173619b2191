//! 클리닉 요청 스키마 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 스키마 레지스트리를 초기화합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::{dotenv};
use env_logger::Env;
use log::{error, info};
use clinic_schema_service::config::{CorsConfig, LocaleConfig, RateLimitConfig, ServerConfig};
use clinic_schema_service::core::registry::SchemaRegistry;
use clinic_schema_service::middlewares::LocaleMiddleware;
use clinic_schema_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 클리닉 요청 스키마 서비스 시작중...");

    // 정의 오류를 첫 요청 전에 드러냄
    SchemaRegistry::initialize();

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화, 로케일 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Schemas: http://{}/api/v1/schemas", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 실패");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let locale_config = LocaleConfig::from_env();
    info!(
        "🌍 로케일: {:?}, 기본값 {}, 접두사 전략 {:?}",
        locale_config.locales,
        locale_config.default_locale,
        locale_config.prefix
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // 로케일 결정 (경로 정규화 이후 실행)
            .wrap(LocaleMiddleware::new(locale_config.clone()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(configure_cors(&allowed_origins))

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// # 검증 및 로케일 결정 로그까지 출력
/// RUST_LOG=clinic_schema_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::CONTENT_LANGUAGE])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
