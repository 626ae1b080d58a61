//! DTOs for users_sea adapter.

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub public_id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl UserCreate {
    pub fn new(
        public_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            public_id: public_id.into(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
