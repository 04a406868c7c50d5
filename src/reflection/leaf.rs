use core::any::Any;

use crate::coerce::{Coerce, CoerceError, coerce_value};

/// Value access for leaf field types.
///
/// A blanket implementation covers every [`Coerce`] type; there is no need
/// to implement this trait directly.
pub trait Leaf: Any {
    /// Parses `source` and stores the result in place.
    ///
    /// Follows the full coercion precedence chain, including the
    /// empty-string-to-default rule of [`coerce_value`].
    fn assign_text(&mut self, source: &str) -> Result<(), CoerceError>;

    /// Resets the value to its type's default.
    fn set_default(&mut self);

    /// Whether extraction should treat the current value as absent
    /// (a `None` option or an empty list).
    fn is_absent(&self) -> bool;

    /// Clones the current value into a boxed leaf.
    fn to_boxed(&self) -> Box<dyn Leaf>;

    /// Casts to [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Coerce> Leaf for T {
    fn assign_text(&mut self, source: &str) -> Result<(), CoerceError> {
        *self = coerce_value(source)?;
        Ok(())
    }

    fn set_default(&mut self) {
        *self = T::default();
    }

    fn is_absent(&self) -> bool {
        Coerce::is_absent(self)
    }

    fn to_boxed(&self) -> Box<dyn Leaf> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl dyn Leaf {
    /// Returns a reference to the underlying value if it is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmap::Leaf;
    ///
    /// let leaf: Box<dyn Leaf> = Box::new(42_i32);
    ///
    /// assert_eq!(leaf.downcast_ref::<i32>(), Some(&42));
    /// assert_eq!(leaf.downcast_ref::<bool>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Checks whether the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}
