//! Check Session Use Case
//!
//! Verifies a cookie token and resolves it to an identity. Runs on every
//! protected request; nothing is cached between requests.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// The authenticated identity a session resolves to
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: UserId,
    pub username: String,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token to the identity it authenticates
    pub async fn identity(&self, session_token: &str) -> AuthResult<SessionIdentity> {
        let session = self.get_session(session_token).await?;

        Ok(SessionIdentity {
            user_id: session.user_id,
            username: session.username,
        })
    }

    /// Get the session and refresh its activity timestamp
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = token::verify(session_token, &self.config.session_secret)
            .ok_or(AuthError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();

        // Update last activity in the background; a failed touch must not
        // fail the request
        let session_clone = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update_activity(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAuthRepository;
    use chrono::Utc;
    use kernel::id::Id;

    fn setup() -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
        (
            Arc::new(InMemoryAuthRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    #[tokio::test]
    async fn test_valid_token_resolves_identity() {
        let (repo, config) = setup();
        let session = Session::new(Id::from_i64(9), "alice".to_string(), chrono::Duration::hours(12));
        repo.create(&session).await.unwrap();
        let session_token = token::sign(session.session_id, &config.session_secret);

        let uc = CheckSessionUseCase::new(repo, config);
        let identity = uc.identity(&session_token).await.unwrap();
        assert_eq!(identity.user_id.as_i64(), 9);
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn test_forged_token_rejected_without_lookup() {
        let (repo, config) = setup();
        let uc = CheckSessionUseCase::new(repo, config);

        let result = uc.identity("aaaa.bbbb").await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_unknown_session_rejected() {
        let (repo, config) = setup();
        let session_token = token::sign(uuid::Uuid::new_v4(), &config.session_secret);

        let uc = CheckSessionUseCase::new(repo, config);
        let result = uc.identity(&session_token).await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_deleted() {
        let (repo, config) = setup();
        let mut session =
            Session::new(Id::from_i64(1), "alice".to_string(), chrono::Duration::hours(12));
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;
        repo.create(&session).await.unwrap();
        let session_token = token::sign(session.session_id, &config.session_secret);

        let uc = CheckSessionUseCase::new(repo.clone(), config);
        let result = uc.identity(&session_token).await;
        assert!(matches!(result, Err(AuthError::SessionInvalid)));

        // The expired row was swept on touch
        assert!(repo.find_by_id(session.session_id).await.unwrap().is_none());
    }
}
