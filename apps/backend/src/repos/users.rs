//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea::{self as users_adapter, UserCreate};
use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub public_id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email).await?;
    Ok(user.map(User::from))
}

pub async fn find_by_public_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    public_id: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_public_id(conn, public_id).await?;
    Ok(user.map(User::from))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, id).await?;
    Ok(user.map(User::from))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_all(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    public_id: &str,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, DomainError> {
    let dto = UserCreate::new(public_id, username, email, password_hash);
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

/// `true` when a row was removed.
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    let rows = users_adapter::delete_by_id(conn, id).await?;
    Ok(rows > 0)
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            public_id: model.public_id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
