//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 값이 없거나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열 (요청 본문에서 생략되었으면 `None`)
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string(Some("  Hello  "), "name").unwrap(), "Hello");
/// assert!(validate_required_string(Some("   "), "name").is_err());
/// assert!(validate_required_string(None, "name").is_err());
/// ```
pub fn validate_required_string(value: Option<&str>, field_name: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(AppError::ValidationError(format!("{} is required", field_name))),
    }
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
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

/// 사용자 입력을 정규식 리터럴로 이스케이프합니다.
///
/// 검색어가 정규식 메타 문자를 포함해도 부분 문자열 검색으로 동작하게 합니다.
pub fn escape_search_pattern(value: &str) -> String {
    regex::escape(value.trim())
}

/// 대소문자를 무시한 부분 문자열 포함 여부
///
/// 인메모리 저장소가 MongoDB의 `$regex` + `i` 옵션과 같은 의미로 검색할 때 사용합니다.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// 순서를 유지하면서 중복을 제거합니다.
pub fn dedupe_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct CreatePostRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     image_url: Option<String>,
/// }
/// ```
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
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string(Some("Hello"), "name").unwrap(), "Hello");
        assert_eq!(validate_required_string(Some("  World  "), "name").unwrap(), "World");

        // 실패 케이스
        assert!(validate_required_string(None, "name").is_err());
        assert!(validate_required_string(Some(""), "name").is_err());
        assert!(validate_required_string(Some("\t\n"), "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_escape_search_pattern_neutralises_metacharacters() {
        let pattern = escape_search_pattern("a.b*(c)");
        let re = regex::Regex::new(&pattern).unwrap();

        assert!(re.is_match("xx a.b*(c) yy"));
        assert!(!re.is_match("aXbbbc"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Hello Rust World", "rust"));
        assert!(contains_ignore_case("Jo", " jO "));
        assert!(!contains_ignore_case("Jo", "Joe"));
    }

    #[test]
    fn test_dedupe_preserving_order() {
        let values = vec!["b".to_string(), "a".to_string(), "b".to_string()];

        assert_eq!(dedupe_preserving_order(values), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "   "}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
