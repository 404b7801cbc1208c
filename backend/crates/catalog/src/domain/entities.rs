//! Catalog Entities

use kernel::id::ModuleId;

use crate::domain::value_objects::Slug;

/// One learning unit in the catalog
///
/// Read-only from this system's perspective; rows are seeded externally.
/// Catalog order is id order, which serial assignment makes insertion
/// order.
#[derive(Debug, Clone)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    pub slug: Slug,
    pub is_premium: bool,
}
