//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! Entities are keyed by database-assigned `BIGSERIAL` values, so unlike a
//! client-generated UUID there is no `new()` here: an `Id<T>` only exists
//! once the row does. Catalog ordering relies on ids being monotonically
//! assigned.
//!
//! Trait impls are written out by hand: deriving them would put bounds on
//! the marker type, which is never instantiated.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a database-assigned value
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Module IDs
    pub struct Module;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ModuleId = Id<markers::Module>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_i64(1);
        let module_id: ModuleId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.into();
        let _m: i64 = module_id.into();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: UserId = Id::from_i64(7);
        assert_eq!(id.as_i64(), 7);
        assert_eq!(UserId::from(7), id);
    }

    #[test]
    fn test_id_ordering() {
        // Serial assignment means id order is insertion order
        let first: ModuleId = Id::from_i64(1);
        let second: ModuleId = Id::from_i64(2);
        assert!(first < second);
    }
}
