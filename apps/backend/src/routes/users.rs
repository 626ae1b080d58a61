use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::auth::MessageResponse;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::middleware::TokenGuard;
use crate::repos::users::User;
use crate::services::users as user_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Public view of a user; never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i64,
    pub public_id: String,
    pub username: String,
    pub email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            public_id: user.public_id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
struct UsersResponse {
    users: Vec<UserView>,
    error: Option<()>,
}

#[derive(Debug, Serialize)]
struct SingleUserResponse {
    #[serde(flatten)]
    user: UserView,
    error: Option<()>,
}

async fn list_users(
    query: web::Query<IdQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    if let Some(raw) = query.id.as_deref() {
        let id = user_service::parse_user_id(Some(raw))?;
        let user = user_service::get_user(db, id).await?;
        return Ok(HttpResponse::Ok().json(SingleUserResponse {
            user: user.into(),
            error: None,
        }));
    }

    let users = user_service::list_users(db).await?;
    Ok(HttpResponse::Ok().json(UsersResponse {
        users: users.into_iter().map(UserView::from).collect(),
        error: None,
    }))
}

async fn delete_user(
    query: web::Query<IdQuery>,
    current: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = user_service::parse_user_id(query.id.as_deref())?;
    let caller_id = current.user.id;
    let db = require_db(&app_state)?;

    let deleted_self = with_txn(db, move |txn| {
        Box::pin(async move { user_service::delete_user(txn, id, caller_id).await })
    })
    .await?;

    if deleted_self {
        user_service::logout(&app_state.revocations, &current);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Successfully deleted user")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        super::resource("/users")
            .wrap(TokenGuard)
            .route(web::get().to(list_users)),
    )
    .service(
        super::resource("/users/delete")
            .wrap(TokenGuard)
            .route(web::delete().to(delete_user)),
    );
}
