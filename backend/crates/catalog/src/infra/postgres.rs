//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entities::Module;
use crate::domain::repository::{MembershipRepository, ModuleRepository};
use crate::domain::value_objects::Slug;
use crate::error::CatalogResult;
use kernel::id::{Id, UserId};

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Module Repository Implementation
// ============================================================================

impl ModuleRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Module>> {
        let rows = sqlx::query_as::<_, ModuleRow>(
            r#"
            SELECT
                id,
                title,
                description,
                slug,
                is_premium
            FROM modules
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ModuleRow::into_module).collect())
    }

    async fn find_by_slug(&self, slug: &Slug) -> CatalogResult<Option<Module>> {
        let row = sqlx::query_as::<_, ModuleRow>(
            r#"
            SELECT
                id,
                title,
                description,
                slug,
                is_premium
            FROM modules
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ModuleRow::into_module))
    }
}

// ============================================================================
// Membership Repository Implementation
// ============================================================================

impl MembershipRepository for PgCatalogRepository {
    async fn is_pro_member(&self, user_id: UserId) -> CatalogResult<bool> {
        let flag = sqlx::query_scalar::<_, bool>(
            "SELECT is_pro_member FROM users WHERE id = $1",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        // Missing row reads as unsubscribed, matching the deny-by-default
        // branch of the access policy
        Ok(flag.unwrap_or(false))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ModuleRow {
    id: i64,
    title: String,
    description: String,
    slug: String,
    is_premium: bool,
}

impl ModuleRow {
    fn into_module(self) -> Module {
        Module {
            id: Id::from_i64(self.id),
            title: self.title,
            description: self.description,
            slug: Slug::from_db(self.slug),
            is_premium: self.is_premium,
        }
    }
}
