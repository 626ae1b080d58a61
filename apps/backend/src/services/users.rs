use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::gate::AuthenticatedUser;
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::revocation::RevocationSet;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

/// Successful login: the minted token plus who it belongs to.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse the `id` query parameter of user endpoints.
pub fn parse_user_id(raw: Option<&str>) -> Result<i64, AppError> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidUserId, "Wrong user id"))
}

/// Register a new account. Nothing is written unless all three fields are
/// present and the email is unused.
pub async fn signup<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<User, AppError> {
    let (Some(username), Some(email), Some(password)) =
        (required(username), required(email), required(password))
    else {
        return Err(AppError::bad_request(
            ErrorCode::MissingFields,
            "Username, email and password are required",
        ));
    };

    if users::find_by_email(conn, email).await?.is_some() {
        debug!(email = %Redacted(email), "signup for existing email");
        return Err(AppError::conflict(
            ErrorCode::UserExists,
            "User already exists. Please log in",
        ));
    }

    let password_hash = hash_password(password)?;
    let public_id = Uuid::new_v4().to_string();
    let user = users::create_user(conn, &public_id, username, email, &password_hash).await?;

    info!(user_id = user.id, public_id = %user.public_id, email = %Redacted(email), "user registered");
    Ok(user)
}

/// Check credentials and mint an access token.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: Option<&str>,
    password: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<LoginOutcome, AppError> {
    let (Some(email), Some(password)) = (required(email), password.filter(|p| !p.is_empty()))
    else {
        return Err(AppError::bad_request(
            ErrorCode::MissingFields,
            "Could not verify: email and password are required",
        ));
    };

    let user = users::find_by_email(conn, email).await?.ok_or_else(|| {
        debug!(email = %Redacted(email), "login for unknown email");
        AppError::unauthorized(ErrorCode::UserDoesNotExist, "User does not exist")
    })?;

    if !verify_password(password, &user.password_hash) {
        info!(user_id = user.id, "login rejected: wrong password");
        return Err(AppError::forbidden(ErrorCode::WrongPassword, "Wrong password"));
    }

    let token = mint_access_token(&user.public_id, now, security)?;
    info!(user_id = user.id, "login succeeded");
    Ok(LoginOutcome { token, user })
}

/// Revoke the caller's token for the rest of its lifetime.
pub fn logout(revocations: &RevocationSet, caller: &AuthenticatedUser) {
    revocations.revoke(caller.token.clone(), caller.claims.exp);
    info!(
        user_id = caller.user.id,
        revoked = revocations.len(),
        "token revoked"
    );
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, AppError> {
    Ok(users::list_all(conn).await?)
}

pub async fn get_user<C: ConnectionTrait + Send + Sync>(conn: &C, id: i64) -> Result<User, AppError> {
    users::find_by_id(conn, id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))
}

/// Delete user `id`. Returns `true` when the caller deleted themselves, in
/// which case the caller must also be logged out once the delete commits.
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    caller_id: i64,
) -> Result<bool, AppError> {
    if !users::delete_by_id(conn, id).await? {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    }
    info!(user_id = id, caller_id, "user deleted");
    Ok(id == caller_id)
}
