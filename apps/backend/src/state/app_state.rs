use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::revocation::RevocationSet;
use crate::AppError;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    /// Logged-out tokens; shared by every worker
    pub revocations: RevocationSet,
}

impl AppState {
    /// Create a new AppState with the given database connection and security config
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            revocations: RevocationSet::new(),
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            revocations: RevocationSet::new(),
        }
    }

    pub fn require_db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db.as_ref().ok_or_else(AppError::db_unavailable)
    }
}
