//! In-memory repository for use-case tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::Module;
use crate::domain::repository::{MembershipRepository, ModuleRepository};
use crate::domain::value_objects::Slug;
use crate::error::CatalogResult;
use kernel::id::UserId;

/// In-memory implementation of the catalog repositories
pub struct InMemoryCatalogRepository {
    modules: Vec<Module>,
    members: Mutex<HashMap<i64, bool>>,
}

impl InMemoryCatalogRepository {
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            members: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_pro_member(&self, user_id: UserId, is_pro: bool) {
        self.members.lock().unwrap().insert(user_id.as_i64(), is_pro);
    }
}

impl ModuleRepository for InMemoryCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Module>> {
        Ok(self.modules.clone())
    }

    async fn find_by_slug(&self, slug: &Slug) -> CatalogResult<Option<Module>> {
        Ok(self.modules.iter().find(|m| m.slug == *slug).cloned())
    }
}

impl MembershipRepository for InMemoryCatalogRepository {
    async fn is_pro_member(&self, user_id: UserId) -> CatalogResult<bool> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .get(&user_id.as_i64())
            .copied()
            .unwrap_or(false))
    }
}
