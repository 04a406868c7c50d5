use crate::info::RecordInfo;
use crate::reflection::Field;

/// Field access for record types.
///
/// Implemented by the [`Record`](crate::derive::Record) derive. Lookup by
/// name covers only the record's own fields; promotion through embedded
/// records is handled by the mapper's path resolution.
///
/// # Examples
///
/// ```
/// use tagmap::{Record, derive::Record};
///
/// #[derive(Record, Default)]
/// struct Foo {
///     #[tag(env = "A")]
///     a: i32,
///     b: bool,
/// }
///
/// let foo = Foo::default();
/// let rec: &dyn Record = &foo;
///
/// assert_eq!(rec.field_len(), 2);
/// assert!(rec.field("a").is_some());
/// assert!(rec.field("missing").is_none());
/// ```
pub trait Record: Field {
    /// Returns the record type's static descriptor.
    fn info(&self) -> &'static RecordInfo;

    /// Returns a reference to the field with the given `name`, if present.
    fn field(&self, name: &str) -> Option<&dyn Field>;

    /// Returns a mutable reference to the field with the given `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Field>;

    /// Returns a reference to the field at `index` (declaration order).
    fn field_at(&self, index: usize) -> Option<&dyn Field>;

    /// Returns a mutable reference to the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Field>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize {
        self.info().field_len()
    }
}
