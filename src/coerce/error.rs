use core::any::type_name;
use core::{error, fmt};

use crate::coerce::DurationParseError;

/// An enumeration of all error outcomes that might happen while coercing a
/// string into a typed field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// The target type's text-unmarshal hook rejected the input.
    Unmarshal {
        ty: &'static str,
        message: String,
    },
    /// The input is not a valid duration literal.
    Duration(DurationParseError),
    /// The generic scan fallback could not parse the input.
    Scan {
        ty: &'static str,
        message: String,
    },
}

impl CoerceError {
    /// Wraps a [`FromText`](crate::coerce::FromText) hook failure for type `T`.
    pub fn unmarshal<T, E: fmt::Display>(err: E) -> Self {
        Self::Unmarshal {
            ty: type_name::<T>(),
            message: err.to_string(),
        }
    }

    /// Wraps a `FromStr` scan failure for type `T`.
    pub fn scan<T, E: fmt::Display>(err: E) -> Self {
        Self::Scan {
            ty: type_name::<T>(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmarshal { ty, message } => {
                write!(f, "`{ty}` rejected the input: {message}")
            }
            Self::Duration(err) => fmt::Display::fmt(err, f),
            Self::Scan { ty, message } => {
                write!(f, "cannot scan the input as `{ty}`: {message}")
            }
        }
    }
}

impl error::Error for CoerceError {}

impl From<DurationParseError> for CoerceError {
    #[inline]
    fn from(value: DurationParseError) -> Self {
        Self::Duration(value)
    }
}
