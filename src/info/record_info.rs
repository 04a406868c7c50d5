use crate::info::FieldInfo;

/// A container for compile-time record info.
///
/// The field order is fixed and matches the declaration order of the
/// record's fields.
///
/// # Examples
///
/// ```
/// use tagmap::{derive::Record, info::Described};
///
/// #[derive(Record, Default)]
/// struct A {
///     #[tag(env = "VAL")]
///     val: f32,
/// }
///
/// let info = A::record_info();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct RecordInfo {
    name: &'static str,
    fields: Box<[FieldInfo]>,
}

impl RecordInfo {
    /// Creates a new [`RecordInfo`] from fields in declaration order.
    pub fn new(name: &'static str, fields: Vec<FieldInfo>) -> Self {
        Self {
            name,
            fields: fields.into_boxed_slice(),
        }
    }

    /// Returns the record's declared name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`FieldInfo`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the [`FieldInfo`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns an iterator over the fields in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FieldInfo> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

/// Static access to a record type's descriptor.
///
/// Implemented by the [`Record`](crate::derive::Record) derive; the instance
/// counterpart is [`Record::info`](crate::Record::info).
pub trait Described {
    /// Returns the record type's [`RecordInfo`].
    fn record_info() -> &'static RecordInfo;
}
