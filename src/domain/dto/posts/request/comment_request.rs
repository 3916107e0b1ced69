//! 댓글 요청 DTO

use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;

/// 댓글 작성 요청
///
/// `parent`가 있으면 같은 게시물의 댓글에 대한 답글이 됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub text: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub parent: Option<String>,
}

/// 댓글 수정 요청
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: Option<String>,
}
