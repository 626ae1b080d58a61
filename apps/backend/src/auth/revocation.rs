//! Process-wide set of logged-out tokens.
//!
//! Entries remember the token's `exp` so they can be pruned once the token
//! would be rejected as expired anyway. Nothing prunes unless the binary
//! starts the prune task; until then the set only grows.

use std::sync::Arc;

use dashmap::DashMap;

#[derive(Debug, Clone, Default)]
pub struct RevocationSet {
    inner: Arc<DashMap<String, i64>>,
}

impl RevocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `token` as revoked. Re-revoking keeps the later expiry.
    pub fn revoke(&self, token: impl Into<String>, exp: i64) {
        self.inner
            .entry(token.into())
            .and_modify(|stored| *stored = (*stored).max(exp))
            .or_insert(exp);
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.inner.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop entries whose `exp <= now`. Returns how many were removed.
    pub fn prune_expired(&self, now: i64) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, exp| *exp > now);
        before.saturating_sub(self.inner.len())
    }
}
