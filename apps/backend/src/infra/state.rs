use crate::auth::revocation::RevocationSet;
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_kind: Option<DbKind>,
    revocations: Option<RevocationSet>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::for_tests(),
            db_kind: None,
            revocations: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Share an existing revocation set instead of starting empty.
    pub fn with_revocations(mut self, revocations: RevocationSet) -> Self {
        self.revocations = Some(revocations);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let mut state = match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => AppState::new(bootstrap_db(kind).await?, self.security_config),
            None => AppState::without_db(self.security_config),
        };
        if let Some(revocations) = self.revocations {
            state.revocations = revocations;
        }
        Ok(state)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
