//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::Module;
use crate::domain::value_objects::Slug;
use crate::error::CatalogResult;
use kernel::id::UserId;

/// Module catalog repository trait
#[trait_variant::make(ModuleRepository: Send)]
pub trait LocalModuleRepository {
    /// All modules in catalog (insertion) order
    async fn list(&self) -> CatalogResult<Vec<Module>>;

    /// Find a module by its slug
    async fn find_by_slug(&self, slug: &Slug) -> CatalogResult<Option<Module>>;
}

/// Subscription lookup trait
///
/// Deliberately a fresh read per call: the access gate re-evaluates the
/// flag on every fetch, so a revoked subscription takes effect
/// immediately.
#[trait_variant::make(MembershipRepository: Send)]
pub trait LocalMembershipRepository {
    /// Whether the user currently holds an active subscription.
    /// An unknown user id reads as `false`.
    async fn is_pro_member(&self, user_id: UserId) -> CatalogResult<bool>;
}
