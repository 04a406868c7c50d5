use core::{error, fmt};

use crate::coerce::CoerceError;

/// An enumeration of all error outcomes that might happen when running
/// [`apply`](crate::Mapper::apply).
#[derive(Debug)]
pub enum ApplyError {
    /// The path does not address a leaf field of the record.
    UnknownPath { path: String },
    /// Coercion failed for a field.
    ///
    /// `field` is the leaf field's declared name, not the full dotted path.
    Coerce { field: String, cause: CoerceError },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPath { path } => {
                write!(f, "path `{path}` does not address a leaf field")
            }
            Self::Coerce { field, cause } => write!(f, "{field}: {cause}"),
        }
    }
}

impl error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::UnknownPath { .. } => None,
            Self::Coerce { cause, .. } => Some(cause),
        }
    }
}
