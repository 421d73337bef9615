//! Identity enrichment and projection callbacks

use async_trait::async_trait;

use crate::session::Session;
use crate::token::SessionToken;
use crate::traits::{AuthCallbacks, User};
use crate::AuthResult;

/// Default callbacks copying user identity into the token and the token
/// into the session
///
/// Token enrichment is first-write-wins: `sub` and `admin` are fixed at
/// sign-in time and later calls cannot alter them without a new sign-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCallbacks;

#[async_trait]
impl AuthCallbacks for IdentityCallbacks {
    async fn jwt(&self, mut token: SessionToken, user: Option<&User>) -> AuthResult<SessionToken> {
        if let Some(user) = user {
            if token.sub.is_none() {
                token.sub = Some(user.id.clone());
            }
            if token.admin.is_none() {
                token.admin = Some(user.admin);
            }
        }
        Ok(token)
    }

    async fn session(&self, mut session: Session, token: &SessionToken) -> AuthResult<Session> {
        // Overlay on every read; stale values never survive
        session.user.admin = token.admin;
        session.user.username = token.sub.clone();
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionUser;

    fn user(id: &str, admin: bool) -> User {
        User {
            id: id.to_string(),
            username: id.to_string(),
            admin,
        }
    }

    #[test]
    fn test_jwt_enriches_fresh_token() {
        let callbacks = IdentityCallbacks;
        let token = SessionToken::issue(3600);

        let token =
            tokio_test::block_on(callbacks.jwt(token, Some(&user("alice", false)))).unwrap();
        assert_eq!(token.sub.as_deref(), Some("alice"));
        assert_eq!(token.admin, Some(false));
    }

    #[test]
    fn test_jwt_enrichment_is_first_write_wins() {
        let callbacks = IdentityCallbacks;
        let token = SessionToken::issue(3600);

        let token =
            tokio_test::block_on(callbacks.jwt(token, Some(&user("admin", true)))).unwrap();

        // A later sign-in call with a different user must not overwrite the claims
        let token =
            tokio_test::block_on(callbacks.jwt(token, Some(&user("mallory", false)))).unwrap();
        assert_eq!(token.sub.as_deref(), Some("admin"));
        assert_eq!(token.admin, Some(true));
    }

    #[test]
    fn test_jwt_is_idempotent_without_user() {
        let callbacks = IdentityCallbacks;
        let token = SessionToken::issue(3600);

        let enriched =
            tokio_test::block_on(callbacks.jwt(token, Some(&user("alice", false)))).unwrap();

        // Refresh calls carry no user and must leave the claims unchanged
        let refreshed = tokio_test::block_on(callbacks.jwt(enriched.clone(), None)).unwrap();
        let refreshed = tokio_test::block_on(callbacks.jwt(refreshed, None)).unwrap();
        assert_eq!(refreshed, enriched);
    }

    #[test]
    fn test_session_projection_overrides_stale_values() {
        let callbacks = IdentityCallbacks;
        let mut token = SessionToken::issue(3600);
        token.sub = Some("alice".to_string());
        token.admin = Some(false);

        let mut session = Session::for_token(&token);
        session.user = SessionUser {
            username: Some("stale-name".to_string()),
            admin: Some(true),
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            image: None,
        };

        let session = tokio_test::block_on(callbacks.session(session, &token)).unwrap();
        assert_eq!(session.user.username.as_deref(), Some("alice"));
        assert_eq!(session.user.admin, Some(false));

        // Application-owned fields survive the overlay
        assert_eq!(session.user.name.as_deref(), Some("Alice"));
        assert_eq!(session.user.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_session_projection_is_deterministic() {
        let callbacks = IdentityCallbacks;
        let mut token = SessionToken::issue(3600);
        token.sub = Some("alice".to_string());
        token.admin = Some(false);

        let a =
            tokio_test::block_on(callbacks.session(Session::for_token(&token), &token)).unwrap();
        let b =
            tokio_test::block_on(callbacks.session(Session::for_token(&token), &token)).unwrap();
        assert_eq!(a, b);
    }
}
