//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username = UserName::new(&input.username)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        let raw_password = RawPassword::new(input.password)
            .map_err(|_| AuthError::Validation("Password cannot be empty".to_string()))?;

        // Advisory pre-check. Two concurrent registrations can both pass
        // it; the UNIQUE constraints decide the loser below.
        if self
            .user_repo
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let new_user = NewUser::new(username.clone(), email, password_hash);

        let user = match self.user_repo.create(&new_user).await {
            Ok(user) => user,
            Err(AuthError::Database(e)) => {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        tracing::warn!(
                            username = %username,
                            "duplicate registration lost the pre-check race"
                        );
                        return Err(AuthError::DuplicateUser);
                    }
                }
                return Err(AuthError::Database(e));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput { user_id: user.id })
    }
}
