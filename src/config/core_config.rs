//! 컴포넌트 코어 설정 모듈
//!
//! 부트스트랩 시 읽는 환경 변수 기반 설정값입니다.

use std::env;

use log::warn;

use crate::components::registration::Scope;

/// 코어 부트스트랩 설정
pub struct CoreConfig;

impl CoreConfig {
    /// 현재 프로필을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PROFILE`: 프로필 이름. 기본값: `dev`
    pub fn profile() -> String {
        env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    }

    /// 프로필에 해당하는 환경 파일 이름 (예: `.env.dev`)
    pub fn env_file() -> String {
        format!(".env.{}", Self::profile())
    }

    /// 스코프를 지정하지 않은 컴포넌트에 적용할 기본 스코프를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `COMPONENT_DEFAULT_SCOPE`: `singleton` | `transient` | `request`. 기본값: `singleton`
    pub fn default_scope() -> Scope {
        Self::parse_scope(env::var("COMPONENT_DEFAULT_SCOPE").ok().as_deref())
    }

    /// 알 수 없는 값은 경고를 남기고 `Singleton`으로 취급합니다.
    pub fn parse_scope(value: Option<&str>) -> Scope {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            None => Scope::default(),
            Some(value) => value.parse().unwrap_or_else(|error: String| {
                warn!("{}, falling back to {}", error, Scope::default());
                Scope::default()
            }),
        }
    }

    /// `env_logger` 기본 필터. 기본값: `info`
    pub fn log_filter() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    }

    /// 호스트 애플리케이션 이름. 기본값: 패키지 이름
    pub fn app_name() -> String {
        env::var("APP_NAME").unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scope() {
        assert_eq!(CoreConfig::parse_scope(None), Scope::Singleton);
        assert_eq!(CoreConfig::parse_scope(Some("")), Scope::Singleton);
        assert_eq!(CoreConfig::parse_scope(Some("transient")), Scope::Transient);
        assert_eq!(CoreConfig::parse_scope(Some(" Request ")), Scope::Request);
        assert_eq!(CoreConfig::parse_scope(Some("prototype")), Scope::Singleton);
    }

    #[test]
    fn test_core_config_defaults() {
        if env::var("PROFILE").is_err() {
            assert_eq!(CoreConfig::profile(), "dev");
            assert_eq!(CoreConfig::env_file(), ".env.dev");
        }

        if env::var("COMPONENT_DEFAULT_SCOPE").is_err() {
            assert_eq!(CoreConfig::default_scope(), Scope::Singleton);
        }

        if env::var("APP_NAME").is_err() {
            assert_eq!(CoreConfig::app_name(), "component_registry");
        }
    }
}
