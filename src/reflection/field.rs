use crate::reflection::{Leaf, Record};

/// A shared view of a field value, classified by how the walk treats it.
pub enum FieldRef<'a> {
    /// A nested or embedded record; the walk recurses into it.
    Record(&'a dyn Record),
    /// A leaf value; the walk stops here.
    Leaf(&'a dyn Leaf),
}

/// A mutable view of a field value, classified by how the walk treats it.
pub enum FieldMut<'a> {
    /// A nested or embedded record; the walk recurses into it.
    Record(&'a mut dyn Record),
    /// A leaf value; coercion assigns into it.
    Leaf(&'a mut dyn Leaf),
}

/// The foundational trait implemented by every mappable field type.
///
/// Leaf types implement it through [`impl_leaf_field!`](crate::impl_leaf_field)
/// (already done for the supported scalar, string, duration, list, and option
/// kinds); record types through the [`Record`](crate::derive::Record) derive.
pub trait Field {
    /// Casts this value to a classified shared view.
    fn kind(&self) -> FieldRef<'_>;

    /// Casts this value to a classified mutable view.
    fn kind_mut(&mut self) -> FieldMut<'_>;
}
