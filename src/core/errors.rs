//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `actix_web::ResponseError` 구현이 유일한 중앙 응답기 역할을 합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": {
//!     "message": "Required fields are missing",
//!     "timestamp": "2024-01-01T00:00:00+00:00",
//!     "stackTrace": "ValidationError(\"Required fields are missing\")"
//!   }
//! }
//! ```
//!
//! `stackTrace`는 프로덕션이 아닌 환경에서만 포함됩니다.
//! 프로덕션에서는 5xx 내부 오류 메시지가 "Internal Server Error"로 축약됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 로그인 실패 |
//! | `ConflictError` | 400 Bad Request | 중복 이메일 |
//! | `NotFound` | 404 Not Found | 리소스 없음 / 소유하지 않은 리소스 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 누락, 만료, 위조 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자 계정 수정 |
//! | `TransientError` | 503 Service Unavailable | 저장소 타임아웃, 연결 실패 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |

use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse};
use mongodb::error::{ErrorKind, WriteFailure};
use serde_json::json;
use thiserror::Error;

use crate::config::Environment;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반. 서비스가 도메인 메시지로 바꿔 응답합니다.
pub const DUPLICATE_KEY: &str = "Duplicate key";

/// 애플리케이션 전역 에러 타입
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseError`: MongoDB 연산 실패
/// - `TransientError`: 재시도 가능한 저장소 장애 (타임아웃, 네트워크)
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패
/// - `ConflictError`: 중복 생성
/// - `NotFound`: 요청된 리소스가 존재하지 않음
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 인증 실패
/// - `AuthorizationError`: 권한 부족
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 예상하지 못한 시스템 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 재시도 가능한 저장소 장애 (503)
    ///
    /// 연산 타임아웃, 서버 선택 실패, 네트워크 I/O 오류가 여기에 해당합니다.
    /// not-found/conflict와 구분되며 클라이언트는 동일한 요청을 다시 보내도 안전합니다.
    #[error("Service temporarily unavailable: {0}")]
    TransientError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// # 예제
    /// ```rust,ignore
    /// if user_data.name.trim().is_empty() {
    ///     return Err(AppError::ValidationError(
    ///         "Required fields are missing".to_string()
    ///     ));
    /// }
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 기존 클라이언트 계약에 맞추어 400 Bad Request로 응답합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 변형 접두어 없이 원래 메시지만 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::TransientError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 충돌 에러의 메시지를 도메인 메시지로 바꿉니다. 다른 에러는 그대로 둡니다.
    pub fn conflict_as(self, message: &str) -> Self {
        match self {
            AppError::ConflictError(_) => AppError::ConflictError(message.to_string()),
            other => other,
        }
    }

    /// 주어진 실행 환경 기준으로 에러 응답 본문을 생성합니다.
    pub fn envelope(&self, env: Environment) -> serde_json::Value {
        let is_internal = matches!(
            self,
            AppError::DatabaseError(_) | AppError::InternalError(_)
        );

        let message = if is_internal && !env.exposes_error_details() {
            "Internal Server Error"
        } else {
            self.message()
        };

        let mut body = json!({
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        if env.exposes_error_details() {
            body["stackTrace"] = json!(format!("{:?}", self));
        }

        json!({ "error": body })
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::TransientError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 전체 내용을 남기고,
    /// 클라이언트에는 환경에 따라 축약된 메시지를 내려보냅니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        HttpResponse::build(status).json(self.envelope(Environment::resolved()))
    }
}

impl From<mongodb::error::Error> for AppError {
    /// MongoDB 에러를 분류합니다.
    ///
    /// - 네트워크 I/O, 서버 선택 실패 → `TransientError`
    /// - duplicate key (11000) → `ConflictError`
    /// - 나머지 → `DatabaseError`
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => {
                AppError::TransientError(err.to_string())
            }
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                AppError::ConflictError(DUPLICATE_KEY.to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(&password, cost).context("Failed to hash password")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

/// JSON 본문 파싱 실패를 공통 에러 형식으로 변환
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 쿼리 문자열 파싱 실패를 공통 에러 형식으로 변환
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 경로 파라미터 파싱 실패를 공통 에러 형식으로 변환
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
    AppError::ValidationError(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Required fields are missing".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_is_bad_request() {
        let error = AppError::ConflictError("duplicate".to_string());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Post not found.".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("not yours".to_string());

        assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_transient_error_is_service_unavailable() {
        let error = AppError::TransientError("timed out".to_string());

        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_production_envelope_hides_internal_details() {
        let error = AppError::DatabaseError("connection string leaked".to_string());
        let body = error.envelope(Environment::Production);

        assert_eq!(body["error"]["message"], "Internal Server Error");
        assert!(body["error"].get("stackTrace").is_none());
        assert!(body["error"]["timestamp"].is_string());
    }

    #[test]
    fn test_development_envelope_includes_details() {
        let error = AppError::DatabaseError("boom".to_string());
        let body = error.envelope(Environment::Development);

        assert_eq!(body["error"]["message"], "boom");
        assert!(body["error"]["stackTrace"].as_str().unwrap().contains("DatabaseError"));
    }

    #[test]
    fn test_client_errors_keep_message_in_production() {
        let error = AppError::ValidationError("You are missing either email or password.".to_string());
        let body = error.envelope(Environment::Production);

        assert_eq!(
            body["error"]["message"],
            "You are missing either email or password."
        );
    }

    #[test]
    fn test_conflict_as_rewrites_only_conflicts() {
        let conflict = AppError::ConflictError(DUPLICATE_KEY.to_string()).conflict_as("taken");
        assert!(matches!(conflict, AppError::ConflictError(ref msg) if msg == "taken"));

        let other = AppError::NotFound("missing".to_string()).conflict_as("taken");
        assert!(matches!(other, AppError::NotFound(ref msg) if msg == "missing"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("disk full");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("disk full"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
