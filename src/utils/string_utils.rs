//! # 문자열 유틸리티
//!
//! 타입 이름, 모듈 경로, 컴포넌트 ID 처리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;

/// 전체 경로가 포함된 타입 이름에서 마지막 세그먼트만 추출합니다.
///
/// `std::any::type_name::<T>()`는 모듈 경로 전체를 포함하므로
/// (예: `my_app::components::UserRepository`), 컴포넌트 ID 기본값과
/// 로그 출력에는 실제 타입 이름만 사용합니다. 제네릭 인자 안의 경로는 유지됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::short_type_name;
///
/// assert_eq!(short_type_name("my_app::UserRepository"), "UserRepository");
/// assert_eq!(short_type_name("my_app::Cache<my_app::User>"), "Cache<my_app::User>");
/// ```
pub fn short_type_name(type_name: &str) -> &str {
    let head_end = type_name.find('<').unwrap_or(type_name.len());

    match type_name[..head_end].rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}

/// 모듈 경로가 주어진 접두 경로와 같거나 그 하위 모듈인지 확인합니다.
///
/// 단순 `starts_with`와 달리 `app::user`가 `app::users`와 매칭되지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::matches_module_path;
///
/// assert!(matches_module_path("app::users::repo", "app::users"));
/// assert!(!matches_module_path("app::users_v2", "app::users"));
/// ```
pub fn matches_module_path(module_path: &str, prefix: &str) -> bool {
    match module_path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}

/// 선택적 문자열 정리
///
/// None 이거나 공백만 있는 경우 None을, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
/// 빈 컴포넌트 ID가 기본 ID를 가리지 않도록 사용됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(deserialize_with = "deserialize_optional_string")]`와 함께 사용하며,
/// 결과는 [`clean_optional_string`]과 같습니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("UserRepository"), "UserRepository");
        assert_eq!(short_type_name("app::components::UserRepository"), "UserRepository");

        // 제네릭 인자 안의 경로는 유지
        assert_eq!(
            short_type_name("app::cache::Cache<app::users::User>"),
            "Cache<app::users::User>"
        );
    }

    #[test]
    fn test_matches_module_path() {
        assert!(matches_module_path("app::users", "app::users"));
        assert!(matches_module_path("app::users::repo", "app::users"));
        assert!(!matches_module_path("app::users_v2", "app::users"));
        assert!(!matches_module_path("other::users", "app::users"));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  userRepo ".to_string())), Some("userRepo".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Options {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            id: Option<String>,
        }

        let result: Options = serde_json::from_str(r#"{"id": "  userRepo  "}"#).unwrap();
        assert_eq!(result.id, Some("userRepo".to_string()));

        let result: Options = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        assert_eq!(result.id, None);

        let result: Options = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.id, None);
    }
}
