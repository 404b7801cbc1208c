//! View Module Use Case
//!
//! The access gate. Evaluated on every fetch; nothing about the policy
//! outcome is cached.

use std::sync::Arc;

use crate::domain::entities::Module;
use crate::domain::repository::{MembershipRepository, ModuleRepository};
use crate::domain::value_objects::Slug;
use crate::error::{CatalogError, CatalogResult};
use kernel::id::UserId;

/// View module use case
pub struct ViewModuleUseCase<M, P>
where
    M: ModuleRepository,
    P: MembershipRepository,
{
    module_repo: Arc<M>,
    membership_repo: Arc<P>,
}

impl<M, P> ViewModuleUseCase<M, P>
where
    M: ModuleRepository,
    P: MembershipRepository,
{
    pub fn new(module_repo: Arc<M>, membership_repo: Arc<P>) -> Self {
        Self {
            module_repo,
            membership_repo,
        }
    }

    /// Resolve a slug for an authenticated viewer
    ///
    /// - Unknown slug: [`CatalogError::ModuleNotFound`]
    /// - Premium module without an active subscription:
    ///   [`CatalogError::AccessDenied`]
    pub async fn execute(&self, slug: &str, viewer: UserId) -> CatalogResult<Module> {
        let slug = Slug::new(slug).map_err(|_| CatalogError::ModuleNotFound)?;

        let module = self
            .module_repo
            .find_by_slug(&slug)
            .await?
            .ok_or(CatalogError::ModuleNotFound)?;

        if module.is_premium {
            // Fresh read each time; an unknown id reads as false
            let is_pro = self.membership_repo.is_pro_member(viewer).await?;
            if !is_pro {
                tracing::debug!(slug = %module.slug, user_id = %viewer, "Premium module denied");
                return Err(CatalogError::AccessDenied);
            }
        }

        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::module;
    use crate::infra::memory::InMemoryCatalogRepository;
    use kernel::id::Id;

    fn repo() -> Arc<InMemoryCatalogRepository> {
        Arc::new(InMemoryCatalogRepository::new(vec![
            module(1, "intro-to-physics", false),
            module(2, "advanced-calculus", true),
        ]))
    }

    #[tokio::test]
    async fn test_free_module_viewable_without_subscription() {
        let repo = repo();
        let uc = ViewModuleUseCase::new(repo.clone(), repo);

        let found = uc.execute("intro-to-physics", Id::from_i64(1)).await.unwrap();
        assert_eq!(found.slug.as_str(), "intro-to-physics");
    }

    #[tokio::test]
    async fn test_unknown_slug_not_found() {
        let repo = repo();
        let uc = ViewModuleUseCase::new(repo.clone(), repo);

        let result = uc.execute("no-such-module", Id::from_i64(1)).await;
        assert!(matches!(result, Err(CatalogError::ModuleNotFound)));
    }

    #[tokio::test]
    async fn test_premium_module_denied_without_subscription() {
        let repo = repo();
        let uc = ViewModuleUseCase::new(repo.clone(), repo.clone());

        let result = uc.execute("advanced-calculus", Id::from_i64(1)).await;
        assert!(matches!(result, Err(CatalogError::AccessDenied)));
    }

    #[tokio::test]
    async fn test_premium_module_allowed_after_flag_flips() {
        let repo = repo();
        let uc = ViewModuleUseCase::new(repo.clone(), repo.clone());
        let viewer = Id::from_i64(1);

        // Denied first, allowed right after the flag flips: the policy
        // re-reads on every fetch
        assert!(uc.execute("advanced-calculus", viewer).await.is_err());

        repo.set_pro_member(viewer, true);
        assert!(uc.execute("advanced-calculus", viewer).await.is_ok());

        // And a revocation blocks the very next request
        repo.set_pro_member(viewer, false);
        assert!(uc.execute("advanced-calculus", viewer).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_viewer_reads_as_unsubscribed() {
        let repo = repo();
        let uc = ViewModuleUseCase::new(repo.clone(), repo);

        let result = uc.execute("advanced-calculus", Id::from_i64(999)).await;
        assert!(matches!(result, Err(CatalogError::AccessDenied)));
    }
}
