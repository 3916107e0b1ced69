//! # 저장소 연산 타임아웃
//!
//! 서비스 계층에서 호출하는 모든 저장소 연산은 [`with_timeout`]으로 감싸
//! 제한 시간을 넘기면 `TransientError`(503)로 실패시킵니다.

use std::future::Future;
use std::time::Duration;

use crate::core::errors::AppError;

/// 주어진 시간 안에 끝나지 않으면 `AppError::TransientError`를 반환합니다.
///
/// # 인자
/// * `limit` - 최대 대기 시간
/// * `operation` - 로그와 에러 메시지에 남길 연산 이름
/// * `fut` - 실행할 저장소 연산
pub async fn with_timeout<T, F>(limit: Duration, operation: &str, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("⏱️ 저장소 연산 시간 초과: {} ({}ms)", operation, limit.as_millis());
            Err(AppError::TransientError(format!(
                "{} timed out after {}ms",
                operation,
                limit.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_completed_operation_passes_through() {
        let result = with_timeout(Duration::from_millis(100), "noop", async { Ok::<_, AppError>(7) }).await;

        assert_eq!(result.unwrap(), 7);
    }

    #[actix_web::test]
    async fn test_slow_operation_becomes_transient_error() {
        let result: Result<(), AppError> = with_timeout(Duration::from_millis(10), "slow", async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(AppError::TransientError(_))));
    }

    #[actix_web::test]
    async fn test_inner_error_is_preserved() {
        let result: Result<(), AppError> = with_timeout(Duration::from_millis(100), "lookup", async {
            Err(AppError::NotFound("missing".to_string()))
        })
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
