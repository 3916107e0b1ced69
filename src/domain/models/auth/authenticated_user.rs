//! 인증된 사용자 추출기
//!
//! 인증 게이트가 요청 확장(extensions)에 넣어 둔 사용자 정보를
//! 핸들러 인자로 꺼내기 위한 `FromRequest` 구현입니다.
//!
//! ```rust,ignore
//! #[get("/me")]
//! async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     Ok(HttpResponse::Ok().json(ApiResponse::success(user.user, "...")))
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::core::errors::AppError;
use crate::domain::dto::users::UserResponse;
use crate::repositories::canonical_id;

/// 요청에 연결된 인증 주체
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserResponse,
}

impl AuthenticatedUser {
    pub fn new(user: UserResponse) -> Self {
        Self { user }
    }

    /// 인증 주체의 사용자 ID
    pub fn id(&self) -> &str {
        &self.user.id
    }

    /// 주어진 ID가 인증 주체 자신인지 확인
    ///
    /// hex 대소문자만 다른 ID도 같은 사용자로 봅니다. 형식이 틀린 ID는 자신이 아닙니다.
    pub fn is_self(&self, user_id: &str) -> bool {
        canonical_id(user_id).is_ok_and(|id| id == self.user.id)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "You are not authorised to access this resource".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::User;
    use mongodb::bson::oid::ObjectId;

    fn principal() -> AuthenticatedUser {
        let mut user = User::new(
            "Jo".to_string(),
            "jo@x.com".to_string(),
            "111".to_string(),
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        AuthenticatedUser::new(UserResponse::from(user))
    }

    #[test]
    fn test_is_self_ignores_hex_case() {
        let principal = principal();
        let id = principal.id().to_string();

        assert!(principal.is_self(&id));
        assert!(principal.is_self(&id.to_uppercase()));
        assert!(!principal.is_self(&ObjectId::new().to_hex()));
        assert!(!principal.is_self("not-an-id"));
    }
}
