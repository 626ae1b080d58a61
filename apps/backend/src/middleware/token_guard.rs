//! Gate middleware for protected routes.
//!
//! Reads the raw `x-access-token` header, runs the auth gate against the
//! shared state, and stores the resolved `AuthenticatedUser` in request
//! extensions for the `CurrentUser` extractor. Rejections are rendered
//! here, inside the request's trace scope, instead of being returned as
//! errors.

use std::rc::Rc;
use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::gate::{check_token, resolve_user, AuthenticatedUser};
use crate::auth::jwt::unix_seconds;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub const TOKEN_HEADER: &str = "x-access-token";

pub struct TokenGuard;

impl<S, B> Transform<S, ServiceRequest> for TokenGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenGuardMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct TokenGuardMiddleware<S> {
    service: Rc<S>,
}

async fn resolve(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("AppState not configured"))?;

    // Non-visible-ASCII header values count as missing.
    let raw = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let now = unix_seconds(SystemTime::now())?;
    let claims = check_token(raw.as_deref(), now, &state.security, &state.revocations)?;

    let db = state.require_db()?;
    resolve_user(db, raw.as_deref().unwrap_or_default(), claims).await
}

impl<S, B> Service<ServiceRequest> for TokenGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match resolve(&req).await {
                Ok(identity) => {
                    debug!(user_id = identity.user.id, "token accepted");
                    req.extensions_mut().insert(identity);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    debug!(code = %err.code(), "token rejected");
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
