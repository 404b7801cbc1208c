//! In-memory doubles for use-case tests

use std::sync::Mutex;

use crate::domain::gateway::{PaymentGateway, PaymentIntent, PaymentVerification};
use crate::domain::repository::BillingRepository;
use crate::error::{BillingError, BillingResult};
use kernel::id::{Id, UserId};

// ============================================================================
// Repository double
// ============================================================================

struct UserRecord {
    id: i64,
    email: String,
    is_pro_member: bool,
}

/// In-memory implementation of the billing repository
pub struct InMemoryBillingRepository {
    users: Mutex<Vec<UserRecord>>,
}

impl InMemoryBillingRepository {
    /// One seeded user
    pub fn with_user(id: i64, email: &str, is_pro_member: bool) -> Self {
        Self {
            users: Mutex::new(vec![UserRecord {
                id,
                email: email.to_string(),
                is_pro_member,
            }]),
        }
    }

    pub fn is_pro_member(&self, id: i64) -> bool {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.is_pro_member)
            .unwrap_or(false)
    }
}

impl BillingRepository for InMemoryBillingRepository {
    async fn email_of(&self, user_id: UserId) -> BillingResult<Option<String>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id.as_i64())
            .map(|u| u.email.clone()))
    }

    async fn find_user_id_by_email(&self, email: &str) -> BillingResult<Option<UserId>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .map(|u| Id::from_i64(u.id)))
    }

    async fn activate_membership(&self, user_id: UserId) -> BillingResult<bool> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == user_id.as_i64()) else {
            return Ok(true);
        };
        let already_active = user.is_pro_member;
        user.is_pro_member = true;
        Ok(already_active)
    }
}

// ============================================================================
// Gateway double
// ============================================================================

/// Arguments the stub saw on its last initialize call
#[derive(Debug, Clone)]
pub struct InitializeCall {
    pub email: String,
    pub amount: i64,
    pub callback_url: String,
}

enum StubBehavior {
    Initialize(String),
    Verify(PaymentVerification),
    Fail(String),
}

/// Canned payment gateway
pub struct StubGateway {
    behavior: StubBehavior,
    last_initialize: Mutex<Option<InitializeCall>>,
}

impl StubGateway {
    /// initialize() succeeds with this authorization URL
    pub fn initializing_to(authorization_url: &str) -> Self {
        Self {
            behavior: StubBehavior::Initialize(authorization_url.to_string()),
            last_initialize: Mutex::new(None),
        }
    }

    /// verify() succeeds with this verification payload
    pub fn verifying(verification: PaymentVerification) -> Self {
        Self {
            behavior: StubBehavior::Verify(verification),
            last_initialize: Mutex::new(None),
        }
    }

    /// Every call fails at the transport level
    pub fn failing(detail: &str) -> Self {
        Self {
            behavior: StubBehavior::Fail(detail.to_string()),
            last_initialize: Mutex::new(None),
        }
    }

    pub fn last_initialize(&self) -> Option<InitializeCall> {
        self.last_initialize.lock().unwrap().clone()
    }
}

impl PaymentGateway for StubGateway {
    async fn initialize(
        &self,
        email: &str,
        amount: i64,
        callback_url: &str,
    ) -> BillingResult<PaymentIntent> {
        match &self.behavior {
            StubBehavior::Fail(detail) => Err(BillingError::Gateway(detail.clone())),
            StubBehavior::Initialize(url) => {
                *self.last_initialize.lock().unwrap() = Some(InitializeCall {
                    email: email.to_string(),
                    amount,
                    callback_url: callback_url.to_string(),
                });
                Ok(PaymentIntent {
                    authorization_url: url.clone(),
                    reference: "stub-ref".to_string(),
                })
            }
            StubBehavior::Verify(_) => Err(BillingError::Gateway(
                "stub not configured for initialize".to_string(),
            )),
        }
    }

    async fn verify(&self, _reference: &str) -> BillingResult<PaymentVerification> {
        match &self.behavior {
            StubBehavior::Fail(detail) => Err(BillingError::Gateway(detail.clone())),
            StubBehavior::Verify(verification) => Ok(verification.clone()),
            StubBehavior::Initialize(_) => Err(BillingError::Gateway(
                "stub not configured for verify".to_string(),
            )),
        }
    }
}
