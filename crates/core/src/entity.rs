//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same thing when their ids match, even if every other
/// attribute is equal on two distinct entities.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (ignores attribute values).
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
