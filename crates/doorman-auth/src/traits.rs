//! Core authentication traits and identity records

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::token::SessionToken;
use crate::AuthResult;

/// Transient user record synthesized by a credential provider
///
/// Constructed fresh per login attempt and never persisted by this crate;
/// its fields flow into the session token at sign-in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,

    /// Username used for authentication
    pub username: String,

    /// Whether the user holds the admin privilege
    pub admin: bool,
}

/// Credentials submitted by the sign-in flow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Create credentials with both fields set
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// Form-field metadata describing one input of a provider's sign-in form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialField {
    /// Key under which the value is submitted
    pub key: String,

    /// Human-readable label
    pub label: String,

    /// Input kind
    pub kind: CredentialFieldKind,

    /// Optional placeholder shown in the empty input
    pub placeholder: Option<String>,
}

/// Input kind for a credential form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialFieldKind {
    Text,
    Password,
}

/// A pluggable component implementing one authentication method
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Stable identifier used to select the provider at sign-in
    fn id(&self) -> &str;

    /// Human-readable provider name shown on sign-in forms
    fn name(&self) -> &str;

    /// Form-field metadata for the provider's sign-in form
    fn credential_fields(&self) -> Vec<CredentialField> {
        vec![]
    }

    /// Verify credentials and synthesize a user record
    ///
    /// `Ok(None)` means "no match": authentication fails without an error
    /// being raised. Errors are reserved for faults in the provider itself.
    async fn authorize(&self, credentials: &Credentials) -> AuthResult<Option<User>>;
}

/// Token and session transformation hooks
///
/// Both methods default to pass-through; `IdentityCallbacks` implements
/// the identity enrichment and projection used by the sign-in flow.
#[async_trait]
pub trait AuthCallbacks: Send + Sync {
    /// Invoked once per sign-in (with the fresh user) and on every token
    /// refresh (user absent)
    async fn jwt(&self, token: SessionToken, _user: Option<&User>) -> AuthResult<SessionToken> {
        Ok(token)
    }

    /// Invoked on every session read
    async fn session(&self, session: Session, _token: &SessionToken) -> AuthResult<Session> {
        Ok(session)
    }
}
