//! User Entity
//!
//! One row in `users`. Created at registration; after that only the
//! subscription flag (and `updated_at`) ever changes, and that mutation
//! belongs to the billing flow.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword,
};

/// User entity (persisted)
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    /// Login + display name (globally unique)
    pub username: UserName,
    /// Contact address, also the payment correlation key (globally unique)
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: UserPassword,
    /// Premium subscription flag, default false
    pub is_pro_member: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// A user about to be inserted; the id does not exist until the row does
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

impl NewUser {
    pub fn new(username: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            username,
            email,
            password_hash,
        }
    }
}
