use crate::{Field, FieldMut, FieldRef, Record};

// One level of indirection to a nested record; the walk sees through it.
impl<R: Record> Field for Box<R> {
    #[inline]
    fn kind(&self) -> FieldRef<'_> {
        FieldRef::Record(&**self)
    }

    #[inline]
    fn kind_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Record(&mut **self)
    }
}
