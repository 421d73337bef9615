//! Request-scoped session projection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::token::SessionToken;

/// User fields exposed to application code on the session
///
/// `username` and `admin` are overlaid from the token on every session
/// read; the remaining fields belong to the application and survive the
/// overlay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: Option<String>,
    pub admin: Option<bool>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// Server-visible, per-request projection derived from the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The session's user view
    pub user: SessionUser,

    /// Expiration time carried over from the token
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Build the base session for a token, before the projection callback runs
    pub fn for_token(token: &SessionToken) -> Self {
        Self {
            user: SessionUser::default(),
            expires_at: token.expires_at,
        }
    }
}
