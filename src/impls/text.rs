use crate::coerce::{Coerce, CoerceError};

impl Coerce for String {
    /// The source is taken verbatim, no parsing.
    fn coerce(source: &str) -> Result<Self, CoerceError> {
        Ok(source.to_owned())
    }
}

crate::impl_leaf_field!(String);
