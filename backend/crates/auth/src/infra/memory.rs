//! In-memory repository for use-case tests
//!
//! Test double implementing the domain repository traits over plain
//! collections. Locks are never held across an await point.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{
    session::Session,
    user::{NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;
use kernel::id::{Id, UserId};

/// In-memory implementation of the auth repositories
pub struct InMemoryAuthRepository {
    users: Mutex<Vec<User>>,
    sessions: Mutex<HashMap<Uuid, Session>>,
    next_id: AtomicI64,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            sessions: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let now = Utc::now();
        let stored = User {
            id: Id::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            is_pro_member: false,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == *username)
            .cloned())
    }

    async fn exists_by_username_or_email(
        &self,
        username: &UserName,
        email: &Email,
    ) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.username == *username || u.email == *email))
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(&session_id).cloned())
    }

    async fn update_activity(&self, session: &Session) -> AuthResult<()> {
        if let Some(stored) = self.sessions.lock().unwrap().get_mut(&session.session_id) {
            stored.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}
