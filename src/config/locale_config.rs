//! 로케일 라우팅 설정
//!
//! 지원 로케일 목록, 기본 로케일, 로케일 협상을 적용할 경로 매처,
//! 그리고 URL 접두사 전략을 정의합니다.
//!
//! | 항목 | 값 |
//! |------|----|
//! | 지원 로케일 | `ar`, `en`, `ckb`, `kmr` |
//! | 기본 로케일 | `ar` (`DEFAULT_LOCALE`로 변경 가능) |
//! | 접두사 전략 | `as-needed` (`LOCALE_PREFIX`로 변경 가능) |
//! | 제외 경로 | `/api`, `/health`, 확장자가 있는 정적 파일 |

use std::env;

/// 지원 로케일 (고정)
pub const SUPPORTED_LOCALES: &[&str] = &["ar", "en", "ckb", "kmr"];

/// 기본 로케일
pub const DEFAULT_LOCALE: &str = "ar";

/// 로케일 협상을 적용하지 않는 경로 접두사
pub const EXCLUDED_PATH_PREFIXES: &[&str] = &["/api", "/health"];

/// URL 로케일 접두사 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalePrefix {
    /// 모든 경로에 로케일 접두사
    Always,
    /// 기본 로케일이 아닐 때만 접두사
    AsNeeded,
    /// 접두사를 쓰지 않음
    Never,
}

impl LocalePrefix {
    /// 문자열에서 전략을 해석합니다. 알 수 없는 값은 `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "always" => Some(LocalePrefix::Always),
            "as-needed" | "as_needed" => Some(LocalePrefix::AsNeeded),
            "never" => Some(LocalePrefix::Never),
            _ => None,
        }
    }
}

/// 로케일 라우팅 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locales: &'static [&'static str],
    pub default_locale: &'static str,
    pub prefix: LocalePrefix,
    pub excluded_prefixes: &'static [&'static str],
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locales: SUPPORTED_LOCALES,
            default_locale: DEFAULT_LOCALE,
            prefix: LocalePrefix::AsNeeded,
            excluded_prefixes: EXCLUDED_PATH_PREFIXES,
        }
    }
}

impl LocaleConfig {
    /// 환경변수에서 설정을 로드합니다.
    ///
    /// * `DEFAULT_LOCALE` - 지원 로케일 중 하나여야 하며, 아니면 `ar` 사용
    /// * `LOCALE_PREFIX` - `always` | `as-needed` | `never` (기본값: `as-needed`)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("DEFAULT_LOCALE").ok().as_deref(),
            env::var("LOCALE_PREFIX").ok().as_deref(),
        )
    }

    fn from_values(default_locale: Option<&str>, prefix: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(requested) = default_locale {
            match config.supported(requested) {
                Some(locale) => config.default_locale = locale,
                None => log::warn!(
                    "지원하지 않는 DEFAULT_LOCALE {}. 기본값 {} 사용",
                    requested,
                    config.default_locale
                ),
            }
        }

        if let Some(requested) = prefix {
            match LocalePrefix::parse(requested) {
                Some(parsed) => config.prefix = parsed,
                None => log::warn!("알 수 없는 LOCALE_PREFIX {}. as-needed 사용", requested),
            }
        }

        config
    }

    /// 지원 로케일이면 정적 문자열을 반환합니다 (대소문자 무시).
    pub fn supported(&self, candidate: &str) -> Option<&'static str> {
        self.locales
            .iter()
            .copied()
            .find(|locale| locale.eq_ignore_ascii_case(candidate))
    }

    /// 이 경로가 로케일 협상 대상인지 확인합니다.
    ///
    /// API, 헬스체크, 확장자가 있는 파일 경로는 제외됩니다.
    pub fn matches(&self, path: &str) -> bool {
        let excluded = self.excluded_prefixes.iter().any(|prefix| {
            path == *prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        });
        if excluded {
            return false;
        }

        let last_segment = path.rsplit('/').next().unwrap_or_default();
        !last_segment.contains('.')
    }
}
