//! Stateless session token carrier

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-held token encoding session identity between requests
///
/// `sub` and `admin` start unset and are filled in by the `jwt` callback
/// at sign-in; once set they are never overwritten. Signing the carrier
/// for transport is owned by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Subject identifier; set once at sign-in
    pub sub: Option<String>,

    /// Privilege flag; set once at sign-in
    pub admin: Option<bool>,

    /// Unique token id
    pub jti: String,

    /// Issuance time
    pub issued_at: DateTime<Utc>,

    /// Expiration time
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Issue a fresh, unenriched token valid for `max_age_secs` seconds
    pub fn issue(max_age_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            sub: None,
            admin: None,
            jti: Uuid::new_v4().to_string(),
            issued_at: now,
            expires_at: now + Duration::seconds(max_age_secs as i64),
        }
    }

    /// Check whether the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Extend the expiration from now
    pub(crate) fn extend(&mut self, max_age_secs: u64) {
        self.expires_at = Utc::now() + Duration::seconds(max_age_secs as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_unenriched() {
        let token = SessionToken::issue(3600);
        assert!(token.sub.is_none());
        assert!(token.admin.is_none());
        assert!(!token.jti.is_empty());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_ids_are_unique() {
        let a = SessionToken::issue(3600);
        let b = SessionToken::issue(3600);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_expiration() {
        let mut token = SessionToken::issue(3600);
        token.expires_at = Utc::now() - Duration::hours(1);
        assert!(token.is_expired());

        token.extend(3600);
        assert!(!token.is_expired());
    }
}
