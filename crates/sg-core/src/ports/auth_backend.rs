//! Authentication backend port
//!
//! Abstracts the GraphQL auth mutations. Failures are returned as raw
//! [`Failure`] values; interpreting them is the classifier's job.

use async_trait::async_trait;

use crate::error::Failure;
use crate::session::{Credentials, Session, TokenPair};

#[async_trait]
pub trait AuthBackendPort: Send + Sync {
    /// Exchange credentials for a fresh session.
    async fn login(&self, credentials: &Credentials) -> Result<Session, Failure>;

    /// Revoke the session server-side. Best effort.
    async fn logout(&self, session: &Session) -> Result<(), Failure>;

    /// Exchange a refresh token for a new token pair.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, Failure>;
}

#[cfg(test)]
mockall::mock! {
    pub AuthBackend {}

    #[async_trait]
    impl AuthBackendPort for AuthBackend {
        async fn login(&self, credentials: &Credentials) -> Result<Session, Failure>;
        async fn logout(&self, session: &Session) -> Result<(), Failure>;
        async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, Failure>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use chrono::Utc;

    #[tokio::test]
    async fn test_port_is_object_safe_and_mockable() {
        let mut backend = MockAuthBackend::new();
        backend.expect_login().returning(|creds| {
            Ok(Session {
                user_id: UserId::from(creds.identifier.as_str()),
                access_token: "a".into(),
                refresh_token: "r".into(),
                email_verified: false,
                phone_verified: false,
                created_at: Utc::now(),
            })
        });
        backend
            .expect_refresh()
            .returning(|_| Err(Failure::network("timeout")));

        let backend: Box<dyn AuthBackendPort> = Box::new(backend);
        let session = backend
            .login(&Credentials::new("usr_9", "pw"))
            .await
            .unwrap();
        assert_eq!(session.user_id.as_str(), "usr_9");
        assert!(backend.refresh("r").await.is_err());
    }
}
