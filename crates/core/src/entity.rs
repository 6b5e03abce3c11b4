//! Entity trait: a record addressed by a stable, copyable identifier.

/// Record with identity that survives changes to its other fields.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier.
    fn id(&self) -> Self::Id;

    /// True when this entity is addressed by `id`.
    fn has_id(&self, id: Self::Id) -> bool {
        self.id() == id
    }
}
