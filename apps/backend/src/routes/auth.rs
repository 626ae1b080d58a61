use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, FormOrJson};
use crate::middleware::TokenGuard;
use crate::services::users as user_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub email: String,
    pub error: Option<()>,
}

/// `{"response": "...", "error": null}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub response: &'static str,
    pub error: Option<()>,
}

impl MessageResponse {
    pub fn new(response: &'static str) -> Self {
        Self {
            response,
            error: None,
        }
    }
}

async fn login(
    body: FormOrJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = user_service::login(
        db,
        body.email.as_deref(),
        body.password.as_deref(),
        SystemTime::now(),
        &app_state.security,
    )
    .await?;

    Ok(HttpResponse::Created().json(LoginResponse {
        token: outcome.token,
        username: outcome.user.username,
        email: outcome.user.email,
        error: None,
    }))
}

async fn signup(
    body: FormOrJson<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let SignupRequest {
        username,
        email,
        password,
    } = body.into_inner();

    with_txn(db, move |txn| {
        Box::pin(async move {
            user_service::signup(
                txn,
                username.as_deref(),
                email.as_deref(),
                password.as_deref(),
            )
            .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("Successfully registered")))
}

async fn logout(
    current: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    user_service::logout(&app_state.revocations, &current);
    Ok(HttpResponse::Ok().json(MessageResponse::new("Successfully logged out")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::resource("/login").route(web::post().to(login)))
        .service(super::resource("/signup").route(web::post().to(signup)))
        .service(
            super::resource("/logout")
                .wrap(TokenGuard)
                .route(web::delete().to(logout)),
        );
}
