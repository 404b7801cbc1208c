//! List Modules Use Case

use std::sync::Arc;

use crate::domain::entities::Module;
use crate::domain::repository::ModuleRepository;
use crate::error::CatalogResult;

/// List modules use case
pub struct ListModulesUseCase<M>
where
    M: ModuleRepository,
{
    module_repo: Arc<M>,
}

impl<M> ListModulesUseCase<M>
where
    M: ModuleRepository,
{
    pub fn new(module_repo: Arc<M>) -> Self {
        Self { module_repo }
    }

    /// All modules, catalog order
    pub async fn execute(&self) -> CatalogResult<Vec<Module>> {
        self.module_repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryCatalogRepository;

    #[tokio::test]
    async fn test_list_keeps_catalog_order() {
        let repo = Arc::new(InMemoryCatalogRepository::new(vec![
            crate::domain::entities::fixtures::module(1, "intro-to-physics", false),
            crate::domain::entities::fixtures::module(2, "advanced-calculus", true),
            crate::domain::entities::fixtures::module(3, "chemistry-basics", false),
        ]));

        let modules = ListModulesUseCase::new(repo).execute().await.unwrap();
        let ids: Vec<i64> = modules.iter().map(|m| m.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
