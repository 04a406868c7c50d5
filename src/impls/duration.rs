use std::time::Duration;

use crate::coerce::{Coerce, CoerceError, parse_duration};

impl Coerce for Duration {
    /// Parses a duration literal like `"1m"` or `"500ms"`.
    fn coerce(source: &str) -> Result<Self, CoerceError> {
        parse_duration(source).map_err(CoerceError::from)
    }
}

crate::impl_leaf_field!(Duration);
