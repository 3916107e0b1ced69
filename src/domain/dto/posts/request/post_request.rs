//! 게시물 요청 DTO

use serde::Deserialize;

use crate::core::errors::AppError;
use crate::domain::dto::users::REQUIRED_FIELDS_MISSING;
use crate::domain::entities::posts::{split_hashtags, PostChanges};
use crate::utils::string_utils::{deserialize_optional_string, validate_required_string};

/// 게시물 작성/수정 요청
///
/// ```json
/// { "text": "hello", "hashtags": "rust,web", "imageUrl": "https://cdn/x.png" }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub text: Option<String>,

    /// 쉼표로 구분된 해시태그
    #[serde(default)]
    pub hashtags: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
}

impl PostRequest {
    /// 검증 후 저장 가능한 게시물 내용으로 변환합니다.
    pub fn into_changes(self) -> Result<PostChanges, AppError> {
        let text = validate_required_string(self.text.as_deref(), "text")
            .map_err(|_| AppError::ValidationError(REQUIRED_FIELDS_MISSING.to_string()))?;

        Ok(PostChanges {
            text,
            image_url: self.image_url,
            hashtags: self.hashtags.as_deref().map(split_hashtags).unwrap_or_default(),
        })
    }
}

/// `GET /v1/post/searchByTag?tags=a,b`
#[derive(Debug, Deserialize)]
pub struct TagSearchQuery {
    pub tags: Option<String>,
}

/// `GET /v1/post/searchByText?text=...`
#[derive(Debug, Deserialize)]
pub struct TextSearchQuery {
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_changes_splits_hashtags() {
        let request: PostRequest = serde_json::from_str(
            r#"{"text": " hi ", "hashtags": "a, b,", "imageUrl": "  "}"#,
        )
        .unwrap();

        let changes = request.into_changes().unwrap();

        assert_eq!(changes.text, "hi");
        assert_eq!(changes.hashtags, vec!["a".to_string(), "b".to_string()]);
        assert!(changes.image_url.is_none());
    }

    #[test]
    fn test_missing_text_is_rejected() {
        let request: PostRequest = serde_json::from_str(r#"{"hashtags": "a"}"#).unwrap();

        assert!(matches!(request.into_changes(), Err(AppError::ValidationError(_))));
    }
}
