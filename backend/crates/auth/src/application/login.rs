//! Login Use Case
//!
//! Authenticates a user and establishes a fresh session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
    /// Token from any session cookie the browser presented. Cleared
    /// before the new session is established (fixation guard).
    pub presented_token: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub user_id: UserId,
    pub username: String,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Every failure from here on is the same InvalidCredentials:
        // callers must not learn whether the username exists.
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        // Clear any session the browser already holds before binding a
        // new one, so a pre-login cookie can never carry over identity.
        if let Some(presented) = &input.presented_token {
            if let Some(old_id) = token::verify(presented, &self.config.session_secret) {
                self.session_repo.delete(old_id).await?;
            }
        }

        let session = Session::new(
            user.id,
            user.username.as_str().to_string(),
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        let session_token = token::sign(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_id: user.id,
            username: user.username.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryAuthRepository;

    async fn repo_with_alice() -> (Arc<InMemoryAuthRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                username: "alice".to_string(),
                email: "alice@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();
        (repo, config)
    }

    fn login_input(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
            presented_token: None,
        }
    }

    #[tokio::test]
    async fn test_login_after_register() {
        let (repo, config) = repo_with_alice().await;
        let uc = LoginUseCase::new(repo.clone(), repo, config);

        let output = uc.execute(login_input("alice", "pw123")).await.unwrap();
        assert_eq!(output.username, "alice");
        assert!(!output.session_token.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_identical() {
        let (repo, config) = repo_with_alice().await;
        let uc = LoginUseCase::new(repo.clone(), repo, config);

        let wrong_password = uc
            .execute(login_input("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = uc
            .execute(login_input("nobody", "pw123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_login_replaces_presented_session() {
        let (repo, config) = repo_with_alice().await;
        let uc = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());

        let first = uc.execute(login_input("alice", "pw123")).await.unwrap();

        let second = uc
            .execute(LoginInput {
                username: "alice".to_string(),
                password: "pw123".to_string(),
                presented_token: Some(first.session_token.clone()),
            })
            .await
            .unwrap();

        // The session referenced by the presented cookie is gone
        let old_id = token::verify(&first.session_token, &config.session_secret).unwrap();
        assert!(
            SessionRepository::find_by_id(&*repo, old_id)
                .await
                .unwrap()
                .is_none()
        );

        let new_id = token::verify(&second.session_token, &config.session_secret).unwrap();
        assert!(
            SessionRepository::find_by_id(&*repo, new_id)
                .await
                .unwrap()
                .is_some()
        );
    }
}
