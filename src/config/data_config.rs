//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 백엔드, 서버, 환경 및 패스워드 해싱 관련 설정을 관리합니다.

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

static RESOLVED_ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 에러 상세 정보를 숨김
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&raw)
    }

    /// 프로세스 전체에서 사용할 실행 환경을 고정합니다.
    ///
    /// 이미 고정되어 있으면 `false`를 반환하고 기존 값을 유지합니다.
    pub fn install(self) -> bool {
        RESOLVED_ENVIRONMENT.set(self).is_ok()
    }

    /// 시작 시 고정된 실행 환경. 고정 전이면 환경 변수를 한 번만 읽어 고정합니다.
    pub fn resolved() -> Self {
        *RESOLVED_ENVIRONMENT.get_or_init(Self::current)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 에러 응답에 내부 메시지와 디버그 정보를 노출해도 되는 환경인지 확인
    pub fn exposes_error_details(&self) -> bool {
        !matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값으로 설정되어 있으면 그 값을 우선합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::resolved())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging/Production: 10
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging | Environment::Production => 10,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 3000
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 사용할 저장소 구현
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 저장소
    Mongo,
    /// 프로세스 메모리 저장소 (로컬 개발 및 테스트용)
    Memory,
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub name: String,
    /// 저장소 백엔드 선택
    pub backend: StoreBackend,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// - `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME` (기본값: "social_dev")
    /// - `STORE_BACKEND` - `mongo` 또는 `memory` (기본값: mongo)
    pub fn from_env() -> Self {
        let backend = match env::var("STORE_BACKEND")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "memory" | "in-memory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        };

        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            name: env::var("DATABASE_NAME").unwrap_or_else(|_| "social_dev".to_string()),
            backend,
        }
    }
}

/// 저장소 연산 제한 설정
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    /// 개별 저장소 연산의 최대 대기 시간
    pub operation_timeout: Duration,
}

impl StoreConfig {
    const DEFAULT_TIMEOUT_MS: u64 = 5_000;

    /// `DB_OPERATION_TIMEOUT_MS`에서 연산 타임아웃을 읽어옵니다.
    pub fn from_env() -> Self {
        let millis = env::var("DB_OPERATION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_TIMEOUT_MS);

        Self {
            operation_timeout: Duration::from_millis(millis),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            operation_timeout: Duration::from_millis(Self::DEFAULT_TIMEOUT_MS),
        }
    }
}

/// 요청 빈도 제한 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 순간적으로 허용되는 요청 수
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본 100), `RATE_LIMIT_BURST_SIZE` (기본 200)
    ///
    /// 숫자가 아니거나 0이면 기본값을 쓰고 경고를 남깁니다.
    pub fn from_env() -> Self {
        Self {
            per_second: positive_from_env("RATE_LIMIT_PER_SECOND", 100),
            burst_size: positive_from_env("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

fn positive_from_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default + std::fmt::Display + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) if value > T::default() => value,
            _ => {
                log::warn!("{} 값 '{}'이(가) 올바르지 않아 기본값 {} 사용", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_resolved_environment_is_fixed_once() {
        let first = Environment::resolved();

        assert!(!Environment::Staging.install());
        assert_eq!(Environment::resolved(), first);
    }

    #[test]
    fn test_error_details_hidden_only_in_production() {
        assert!(Environment::Development.exposes_error_details());
        assert!(Environment::Staging.exposes_error_details());
        assert!(!Environment::Production.exposes_error_details());
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            10
        );
    }

    #[test]
    fn test_store_config_default_timeout() {
        assert_eq!(
            StoreConfig::default().operation_timeout,
            Duration::from_millis(5_000)
        );
    }

    #[test]
    fn test_positive_from_env_uses_default_when_unset() {
        assert_eq!(positive_from_env::<u64>("SOCIAL_TEST_UNSET_RATE_LIMIT", 7), 7);
    }
}
