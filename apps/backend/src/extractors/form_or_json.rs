use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Body extractor accepting either `application/json` or a url-encoded form.
///
/// Anything that is not JSON is parsed as a form, so clients that post
/// without a content type land on the form path.
#[derive(Debug)]
pub struct FormOrJson<T>(pub T);

impl<T> FormOrJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for FormOrJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn is_json(content_type: &str) -> bool {
    content_type == "application/json" || content_type.ends_with("+json")
}

fn body_error(kind: &'static str, e: actix_web::Error) -> AppError {
    debug!(kind, error = %e, "request body rejected");
    AppError::bad_request(ErrorCode::MissingFields, "Could not read request fields")
}

impl<T> FromRequest for FormOrJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_json(req.content_type()) {
            let fut = web::Json::<T>::from_request(req, payload);
            Box::pin(async move {
                fut.await
                    .map(|json| FormOrJson(json.into_inner()))
                    .map_err(|e| body_error("json", e))
            })
        } else {
            let fut = web::Form::<T>::from_request(req, payload);
            Box::pin(async move {
                fut.await
                    .map(|form| FormOrJson(form.into_inner()))
                    .map_err(|e| body_error("form", e))
            })
        }
    }
}
