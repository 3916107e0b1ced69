//! User Entity Implementation
//!
//! 사용자(Identity) 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 로그인과 팔로우 관계를 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 계정 레코드입니다.
/// `password_hash`는 자격 증명 검증 경로에서만 채워지며,
/// 일반 조회에서는 프로젝션으로 제외되어 `None`입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 휴대폰 번호
    pub mobile: String,
    /// bcrypt 해시
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 이 사용자를 팔로우하는 사용자 ID 목록
    #[serde(default)]
    pub followers: Vec<String>,
    /// 이 사용자가 팔로우하는 사용자 ID 목록
    #[serde(default)]
    pub following: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 해시는 호출자가 미리 계산해서 넘겨야 합니다. ID는 저장 시점에 부여됩니다.
    pub fn new(name: String, email: String, mobile: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            mobile,
            password_hash: Some(password_hash),
            followers: Vec::new(),
            following: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해시를 제거한 사본을 반환합니다.
    pub fn without_password(mut self) -> Self {
        self.password_hash = None;
        self
    }
}

/// 부분 수정 필드
///
/// `None`인 필드는 변경하지 않습니다. `password_hash`는 서비스 계층에서
/// 평문 비밀번호를 해싱한 뒤에만 채워집니다.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.mobile.is_none()
            && self.password_hash.is_none()
    }
}
