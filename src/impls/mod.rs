//! [`Coerce`] and [`Field`] implementations for the supported leaf kinds.
//!
//! [`Coerce`]: crate::coerce::Coerce
//! [`Field`]: crate::Field

mod boxed;
mod duration;
mod list;
mod option;
mod scalar;
mod text;

/// Implements [`Field`](crate::Field) for concrete leaf types.
///
/// A leaf type needs both a [`Coerce`](crate::coerce::Coerce) implementation
/// and a `Field` implementation; this macro supplies the latter. It is
/// already applied to every built-in leaf kind; call it for your own types
/// after implementing `Coerce` (or use
/// [`impl_text_field!`](crate::impl_text_field), which does both).
#[macro_export]
macro_rules! impl_leaf_field {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Field for $ty {
            #[inline]
            fn kind(&self) -> $crate::FieldRef<'_> {
                $crate::FieldRef::Leaf(self)
            }

            #[inline]
            fn kind_mut(&mut self) -> $crate::FieldMut<'_> {
                $crate::FieldMut::Leaf(self)
            }
        }
    )*};
}

/// Implements [`Coerce`](crate::coerce::Coerce) and [`Field`](crate::Field)
/// for types carrying a [`FromText`](crate::coerce::FromText) hook.
///
/// The generated `Coerce` implementation routes every non-empty source
/// through the hook, taking precedence over any other parsing strategy the
/// type might structurally qualify for.
///
/// # Examples
///
/// ```
/// use tagmap::coerce::{FromText, coerce_value};
///
/// #[derive(Clone, Default, PartialEq, Debug)]
/// struct Upper(String);
///
/// impl FromText for Upper {
///     type Err = core::convert::Infallible;
///
///     fn from_text(text: &str) -> Result<Self, Self::Err> {
///         Ok(Upper(text.to_uppercase()))
///     }
/// }
///
/// tagmap::impl_text_field!(Upper);
///
/// assert_eq!(coerce_value::<Upper>("abc").unwrap(), Upper("ABC".into()));
/// ```
#[macro_export]
macro_rules! impl_text_field {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::coerce::Coerce for $ty {
            fn coerce(
                source: &str,
            ) -> ::core::result::Result<Self, $crate::coerce::CoerceError> {
                <$ty as $crate::coerce::FromText>::from_text(source)
                    .map_err(|err| $crate::coerce::CoerceError::unmarshal::<$ty, _>(err))
            }
        }

        $crate::impl_leaf_field!($ty);
    )*};
}
