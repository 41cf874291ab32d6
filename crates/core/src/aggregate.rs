//! Aggregate root trait for in-memory domain models.

/// Aggregate root marker + minimal interface.
///
/// Kept small so each module decides how it models state transitions. The
/// aggregate owns its child entities and is the only entry point for mutating
/// them.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful mutation; rejected operations leave it
    /// untouched.
    fn version(&self) -> u64;
}
