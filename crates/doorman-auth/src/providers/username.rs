//! Username credential provider
//!
//! Accepts any non-empty username and synthesizes a user record from it.
//! The password field is carried on the sign-in form but never validated;
//! this is a deliberate demo policy, not a lookup against a user store.

use async_trait::async_trait;

use crate::traits::{CredentialField, CredentialFieldKind, Credentials, CredentialsProvider, User};
use crate::AuthResult;

/// Username granted the admin flag. Exact, case-sensitive match.
pub const ADMIN_USERNAME: &str = "admin";

/// Username/password provider with the trivial acceptance policy
#[derive(Debug, Clone)]
pub struct UsernameProvider {
    id: String,
    name: String,
}

impl UsernameProvider {
    pub fn new() -> Self {
        Self {
            id: "username-signin".to_string(),
            name: "Username".to_string(),
        }
    }

    /// Create a provider registered under a custom id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new()
        }
    }
}

impl Default for UsernameProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for UsernameProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn credential_fields(&self) -> Vec<CredentialField> {
        vec![
            CredentialField {
                key: "username".to_string(),
                label: "Username".to_string(),
                kind: CredentialFieldKind::Text,
                placeholder: Some(ADMIN_USERNAME.to_string()),
            },
            CredentialField {
                key: "password".to_string(),
                label: "Password".to_string(),
                kind: CredentialFieldKind::Password,
                placeholder: None,
            },
        ]
    }

    async fn authorize(&self, credentials: &Credentials) -> AuthResult<Option<User>> {
        let Some(username) = credentials.username.as_deref().filter(|u| !u.is_empty()) else {
            return Ok(None);
        };

        Ok(Some(User {
            id: username.to_string(),
            username: username.to_string(),
            admin: username == ADMIN_USERNAME,
        }))
    }
}
