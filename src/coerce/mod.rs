//! The coercion engine: type-directed conversion of strings into values.
//!
//! Dispatch precedence, evaluated in this exact order:
//!
//! 1. An empty source yields the type's default value ([`coerce_value`]),
//!    without consulting any parsing strategy.
//! 2. A [`FromText`] hook on the target type parses the raw text.
//! 3. `std::time::Duration` parses a duration literal ([`parse_duration`]).
//! 4. A list splits the source on `,` and coerces each element recursively.
//! 5. `String` takes the source verbatim.
//! 6. Anything else falls back to a generic `FromStr` scan of the trimmed
//!    source.
//!
//! Steps 2–6 are fixed per type by its [`Coerce`] implementation; a type
//! that is string-like but carries a [`FromText`] hook always takes the
//! hook path.

mod duration;
mod error;

pub use duration::{DurationParseError, parse_duration};
pub use error::CoerceError;

use core::any::Any;
use core::fmt;

/// Type-directed parsing of a non-empty string into a value.
///
/// Implementations exist for the scalar family (`FromStr` scan of the
/// trimmed source), `String`, `std::time::Duration`, `Vec<T: Coerce>`, and
/// `Option<T: Coerce>`. Types with a [`FromText`] hook get an implementation
/// through [`impl_text_field!`](crate::impl_text_field).
pub trait Coerce: Default + Clone + Any + Sized {
    /// Parses a non-empty `source` into a value.
    ///
    /// The empty-source case is handled by [`coerce_value`] and never
    /// reaches this method through the engine.
    fn coerce(source: &str) -> Result<Self, CoerceError>;

    /// Whether extraction should treat the value as absent.
    ///
    /// `false` for everything except `Option::None` and empty lists.
    fn is_absent(&self) -> bool {
        false
    }
}

/// Converts `source` into a value of type `T`.
///
/// An empty `source` short-circuits to `T::default()`; no parsing strategy
/// (not even a [`FromText`] hook) is consulted.
///
/// # Examples
///
/// ```
/// use tagmap::coerce::coerce_value;
///
/// assert_eq!(coerce_value::<Vec<i32>>("1,2,3,4").unwrap(), vec![1, 2, 3, 4]);
/// assert_eq!(coerce_value::<Vec<i32>>("").unwrap(), Vec::new());
/// assert_eq!(coerce_value::<u16>(" 8080 ").unwrap(), 8080);
/// assert!(coerce_value::<u16>("x").is_err());
/// ```
pub fn coerce_value<T: Coerce>(source: &str) -> Result<T, CoerceError> {
    if source.is_empty() {
        return Ok(T::default());
    }
    T::coerce(source)
}

/// Capability interface for types that parse themselves from text.
///
/// Register a type's hook with [`impl_text_field!`](crate::impl_text_field);
/// the generated [`Coerce`] implementation takes precedence over every other
/// parsing strategy for that type.
pub trait FromText: Sized {
    /// The error produced on malformed text.
    type Err: fmt::Display;

    /// Parses `text` into a value.
    fn from_text(text: &str) -> Result<Self, Self::Err>;
}

#[cfg(test)]
mod tests {
    use super::{CoerceError, FromText, coerce_value};

    #[derive(Clone, Default, Debug, PartialEq)]
    struct Upper(String);

    impl FromText for Upper {
        type Err = core::convert::Infallible;

        fn from_text(text: &str) -> Result<Self, Self::Err> {
            Ok(Upper(text.to_uppercase()))
        }
    }

    crate::impl_text_field!(Upper);

    #[test]
    fn empty_source_yields_default() {
        assert_eq!(coerce_value::<String>("").unwrap(), String::new());
        assert_eq!(coerce_value::<i64>("").unwrap(), 0);
        assert_eq!(coerce_value::<Option<bool>>("").unwrap(), None);
        // The hook is not consulted for empty sources.
        assert_eq!(coerce_value::<Upper>("").unwrap(), Upper(String::new()));
    }

    #[test]
    fn hook_takes_precedence_over_string_likeness() {
        assert_eq!(
            coerce_value::<Upper>("abc").unwrap(),
            Upper("ABC".to_owned())
        );
    }

    #[test]
    fn scan_fallback_trims_whitespace() {
        assert_eq!(coerce_value::<i32>(" 42 ").unwrap(), 42);
        assert_eq!(coerce_value::<bool>("true").unwrap(), true);
        assert_eq!(coerce_value::<f64>("1.5").unwrap(), 1.5);
    }

    #[test]
    fn scan_failure_names_the_target_type() {
        let err = coerce_value::<u8>("256").unwrap_err();
        match err {
            CoerceError::Scan { ty, .. } => assert_eq!(ty, "u8"),
            other => panic!("expected a scan error, got {other:?}"),
        }
    }

    #[test]
    fn option_wraps_parsed_values() {
        assert_eq!(coerce_value::<Option<u32>>("7").unwrap(), Some(7));
        assert!(coerce_value::<Option<u32>>("x").is_err());
    }
}
