//! 로케일 결정 로직
//!
//! 요청 경로와 `Accept-Language` 헤더로부터 로케일을 결정하는 순수 함수입니다.
//! 미들웨어는 이 결정을 HTTP 동작(통과, 경로 재작성, 리다이렉트)으로 옮깁니다.
//!
//! ## 결정 규칙
//!
//! 1. 매처에서 제외된 경로 → `Skip`
//! 2. 첫 경로 세그먼트가 지원 로케일 → 해당 로케일, 접두사 제거 후 내부 재작성
//!    (`as-needed`에서 기본 로케일 접두사, `never`에서 모든 접두사는 제거 경로로 리다이렉트)
//! 3. 접두사 없음 → `Accept-Language` 중 첫 지원 로케일(q 순), 없으면 기본 로케일
//!    (`always` 또는 `as-needed`의 비기본 로케일이면 접두사 경로로 리다이렉트)
//!
//! 지원하지 않는 세그먼트(예: `/fr/...`)는 로케일로 받아들이지 않고 일반 경로로 취급합니다.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::config::{LocaleConfig, LocalePrefix, DEFAULT_LOCALE};

/// 요청에 대해 결정된 로케일 (request extensions에 저장)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub &'static str);

impl RequestLocale {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromRequest for RequestLocale {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let locale = req
            .extensions()
            .get::<RequestLocale>()
            .copied()
            .unwrap_or(RequestLocale(DEFAULT_LOCALE));
        ready(Ok(locale))
    }
}

/// 로케일 결정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDecision {
    /// 로케일 협상 대상이 아닌 경로
    Skip,
    /// 요청을 처리. `rewrite`가 있으면 접두사를 제거한 경로로 내부 재작성
    Serve {
        locale: &'static str,
        rewrite: Option<String>,
    },
    /// 307 리다이렉트
    Redirect {
        locale: &'static str,
        location: String,
    },
}

/// 경로와 `Accept-Language` 헤더로 로케일을 결정합니다.
pub fn resolve(config: &LocaleConfig, path: &str, accept_language: Option<&str>) -> LocaleDecision {
    if !config.matches(path) {
        return LocaleDecision::Skip;
    }

    if let Some((locale, stripped)) = split_locale_prefix(config, path) {
        return match config.prefix {
            LocalePrefix::AsNeeded if locale == config.default_locale => LocaleDecision::Redirect {
                locale,
                location: stripped,
            },
            LocalePrefix::Never => LocaleDecision::Redirect {
                locale,
                location: stripped,
            },
            _ => LocaleDecision::Serve {
                locale,
                rewrite: Some(stripped),
            },
        };
    }

    let locale = negotiate(config, accept_language);
    let needs_prefix = match config.prefix {
        LocalePrefix::Always => true,
        LocalePrefix::AsNeeded => locale != config.default_locale,
        LocalePrefix::Never => false,
    };

    if needs_prefix {
        LocaleDecision::Redirect {
            locale,
            location: with_locale_prefix(locale, path),
        }
    } else {
        LocaleDecision::Serve {
            locale,
            rewrite: None,
        }
    }
}

/// 첫 세그먼트가 지원 로케일이면 (로케일, 접두사를 제거한 경로)
fn split_locale_prefix(config: &LocaleConfig, path: &str) -> Option<(&'static str, String)> {
    let trimmed = path.strip_prefix('/')?;
    let segment = trimmed.split('/').next()?;
    let locale = config.supported(segment)?;

    // 연속 슬래시를 합쳐 `//host` 형태의 리다이렉트 대상을 만들지 않음
    let stripped = trimmed[segment.len()..]
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(String::new(), |mut acc, part| {
            acc.push('/');
            acc.push_str(part);
            acc
        });
    let stripped = if stripped.is_empty() { "/".to_string() } else { stripped };
    Some((locale, stripped))
}

fn with_locale_prefix(locale: &str, path: &str) -> String {
    if path == "/" {
        format!("/{}", locale)
    } else {
        format!("/{}{}", locale, path)
    }
}

/// `Accept-Language`에서 품질값 순으로 첫 번째 지원 로케일을 찾습니다.
///
/// `ckb-IQ`처럼 지역 태그가 붙은 경우 기본 언어 태그(`ckb`)로도 매칭합니다.
pub fn negotiate(config: &LocaleConfig, accept_language: Option<&str>) -> &'static str {
    let Some(header) = accept_language else {
        return config.default_locale;
    };

    let mut ranges: Vec<(f32, &str)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = match pieces.find_map(|p| p.trim().strip_prefix("q=")) {
                Some(q) => q.trim().parse::<f32>().ok()?,
                None => 1.0,
            };
            (quality > 0.0).then_some((quality, tag))
        })
        .collect();

    // 안정 정렬이므로 같은 품질값은 헤더 순서를 유지
    ranges.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranges
        .iter()
        .find_map(|(_, tag)| {
            config
                .supported(tag)
                .or_else(|| tag.split('-').next().and_then(|primary| config.supported(primary)))
        })
        .unwrap_or(config.default_locale)
}
