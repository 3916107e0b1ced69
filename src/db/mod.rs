//! # Database Module
//!
//! MongoDB 연결을 관리합니다. 연결 설정은 [`DatabaseConfig`]로 주입됩니다.

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;

use crate::config::DatabaseConfig;
use crate::core::errors::AppError;

/// MongoDB 연결 핸들
///
/// `Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// MongoDB에 연결하고 ping으로 연결을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TransientError` - 서버에 도달할 수 없는 경우
    /// * `AppError::DatabaseError` - URI 파싱 실패 등
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        // MongoDB 클라이언트 옵션 파싱
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("social_service".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.name);

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
