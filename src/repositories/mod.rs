//! # Repository Layer
//!
//! 저장소 접근을 trait으로 추상화합니다. 각 trait은 두 가지 구현을 가집니다.
//!
//! - `Mongo*Repository` - MongoDB 컬렉션 기반 (운영)
//! - `InMemory*Repository` - `RwLock<HashMap>` 기반 (로컬 개발, 테스트)
//!
//! 서비스는 `Arc<dyn UserRepository>` 형태로 구현을 주입받으므로
//! `STORE_BACKEND` 설정만으로 저장소를 교체할 수 있습니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;

pub mod users;
pub mod posts;

pub use users::*;
pub use posts::*;

/// 문자열 ID를 ObjectId로 파싱합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 24자리 hex 형식이 아닌 경우
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("Invalid ID format: {}", id)))
}

/// 문자열 ID를 소문자 24자리 hex 표준형으로 정규화합니다.
///
/// `ObjectId::parse_str`는 대문자 hex도 받아들이므로, 저장하거나 비교하는 ID는
/// 항상 이 형태여야 같은 엔티티가 하나의 문자열로만 표현됩니다.
pub fn canonical_id(id: &str) -> Result<String, AppError> {
    parse_object_id(id).map(|object_id| object_id.to_hex())
}

/// 읽기 잠금을 획득합니다. poison 상태는 내부 오류로 보고합니다.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, AppError> {
    lock.read()
        .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
}

/// 쓰기 잠금을 획득합니다. poison 상태는 내부 오류로 보고합니다.
pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, AppError> {
    lock.write()
        .map_err(|_| AppError::InternalError("in-memory store lock poisoned".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_canonical_id_lowercases_hex() {
        let id = ObjectId::new().to_hex();

        assert_eq!(canonical_id(&id.to_uppercase()).unwrap(), id);
        assert_eq!(canonical_id(&format!(" {} ", id)).unwrap(), id);
        assert!(matches!(canonical_id("zz"), Err(AppError::ValidationError(_))));
    }
}
