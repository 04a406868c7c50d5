use crate::coerce::{Coerce, CoerceError};
use crate::{Field, FieldMut, FieldRef};

impl<T: Coerce> Coerce for Option<T> {
    /// A non-empty source parses into `Some`; the empty source becomes
    /// `None` through the default rule of
    /// [`coerce_value`](crate::coerce::coerce_value).
    fn coerce(source: &str) -> Result<Self, CoerceError> {
        T::coerce(source).map(Some)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Coerce> Field for Option<T> {
    #[inline]
    fn kind(&self) -> FieldRef<'_> {
        FieldRef::Leaf(self)
    }

    #[inline]
    fn kind_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Leaf(self)
    }
}
