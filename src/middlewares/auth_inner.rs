//! 인증 게이트의 요청 처리 서비스

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::core::state::AppState;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::TokenError;

/// 헤더 누락, 형식 오류, 존재하지 않는 사용자
pub const NOT_AUTHORISED: &str = "You are not authorised to access this resource";
/// 만료 또는 위조된 토큰
pub const SESSION_EXPIRED: &str = "This session has expired, Please login again.";

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req).await {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.id());
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, err.error_response()).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AppState is not registered".to_string()))?;

    // Authorization 헤더 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("인증 실패: Authorization 헤더 없음 ({})", req.path());
            AppError::AuthenticationError(NOT_AUTHORISED.to_string())
        })?;

    // Bearer 토큰 추출
    let token = state.tokens.extract_bearer_token(auth_header)?;

    // 토큰 검증
    let user_id = state.tokens.verify(token).map_err(|err| {
        match &err {
            TokenError::Expired => log::warn!("인증 실패: 만료된 토큰"),
            TokenError::Malformed(reason) => log::warn!("인증 실패: 잘못된 토큰 ({})", reason),
        }
        AppError::AuthenticationError(SESSION_EXPIRED.to_string())
    })?;

    // 사용자 조회
    match state.users.find_by_id(&user_id).await {
        Ok(Some(user)) => Ok(AuthenticatedUser::new(user)),
        Ok(None) | Err(AppError::ValidationError(_)) => {
            log::warn!("인증 실패: 존재하지 않는 사용자 {}", user_id);
            Err(AppError::AuthenticationError(NOT_AUTHORISED.to_string()))
        }
        Err(err) => Err(err),
    }
}
