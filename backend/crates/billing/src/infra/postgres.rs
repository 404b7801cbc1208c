//! PostgreSQL Repository Implementations

use chrono::Utc;
use sqlx::PgPool;

use crate::domain::repository::BillingRepository;
use crate::error::BillingResult;
use kernel::id::{Id, UserId};

/// PostgreSQL-backed billing repository
#[derive(Clone)]
pub struct PgBillingRepository {
    pool: PgPool,
}

impl PgBillingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BillingRepository for PgBillingRepository {
    async fn email_of(&self, user_id: UserId) -> BillingResult<Option<String>> {
        let email = sqlx::query_scalar::<_, String>("SELECT email FROM users WHERE id = $1")
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        Ok(email)
    }

    async fn find_user_id_by_email(&self, email: &str) -> BillingResult<Option<UserId>> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.map(Id::from_i64))
    }

    async fn activate_membership(&self, user_id: UserId) -> BillingResult<bool> {
        // Guarded update: zero rows affected means the flag was already
        // set (or the row vanished; callers looked it up just before)
        let updated = sqlx::query(
            r#"
            UPDATE users SET
                is_pro_member = TRUE,
                updated_at = $2
            WHERE id = $1 AND is_pro_member = FALSE
            "#,
        )
        .bind(user_id.as_i64())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 0)
    }
}
