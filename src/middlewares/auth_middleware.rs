//! # 인증 게이트 미들웨어
//!
//! 보호된 스코프에 `.wrap(AuthMiddleware::required())`로 적용합니다.
//! 요청마다 다음 순서로 동작하며 어떤 상태도 저장하지 않습니다.
//!
//! 1. `Authorization: Bearer <token>` 헤더 추출 (없으면 401)
//! 2. 토큰 서명/만료 검증 (실패하면 401, 만료/위조 구분은 로그에만 남김)
//! 3. `sub`로 사용자 조회 (없으면 401, 저장소 장애는 그대로 전파)
//! 4. [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를 요청 확장에 저장
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/v1/user")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::all_users)
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 게이트
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 세션 토큰을 요구하는 게이트
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
