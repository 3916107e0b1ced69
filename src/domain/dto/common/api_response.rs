//! 성공 응답 공통 형식
//!
//! 모든 성공 응답은 `{status, data, message}` 형태를 따릅니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 성공 응답 본문
///
/// ```json
/// {
///   "status": "success",
///   "data": { ... },
///   "message": "Thank you for registering with us."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success",
            data,
            message: message.into(),
        }
    }
}

/// 데이터가 없는 성공 응답의 `data` 자리 (`{}`)
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

/// BSON 시각을 RFC 3339로 직렬화되는 UTC 시각으로 변환
pub fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_serializes_as_object() {
        let json = serde_json::to_value(ApiResponse::success(Empty::default(), "Followed successfully")).unwrap();

        assert_eq!(json["data"], serde_json::json!({}));
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Followed successfully");
    }

    #[test]
    fn test_to_utc_keeps_millis() {
        let bson_time = mongodb::bson::DateTime::from_millis(1_700_000_000_123);

        assert_eq!(to_utc(bson_time).timestamp_millis(), 1_700_000_000_123);
    }
}
