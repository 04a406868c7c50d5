use crate::coerce::{Coerce, CoerceError, coerce_value};
use crate::{Field, FieldMut, FieldRef};

impl<T: Coerce> Coerce for Vec<T> {
    /// Splits the source on `,` and coerces each element recursively.
    ///
    /// A literal comma inside an element is not representable. An error at
    /// any element aborts the whole list.
    fn coerce(source: &str) -> Result<Self, CoerceError> {
        source.split(',').map(coerce_value).collect()
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Coerce> Field for Vec<T> {
    #[inline]
    fn kind(&self) -> FieldRef<'_> {
        FieldRef::Leaf(self)
    }

    #[inline]
    fn kind_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Leaf(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::coerce::{Coerce, CoerceError, coerce_value};

    #[test]
    fn splits_and_coerces_elements() {
        assert_eq!(coerce_value::<Vec<i32>>("1,2,3,4").unwrap(), [1, 2, 3, 4]);
        assert_eq!(
            coerce_value::<Vec<String>>("a,b").unwrap(),
            ["a".to_owned(), "b".to_owned()]
        );
    }

    #[test]
    fn empty_source_is_the_zero_list() {
        // Not a one-element list containing an empty string.
        assert_eq!(coerce_value::<Vec<i32>>("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn empty_elements_take_their_default() {
        assert_eq!(coerce_value::<Vec<i32>>("1,,3").unwrap(), [1, 0, 3]);
    }

    #[test]
    fn element_coercion_recurses_per_type() {
        assert_eq!(
            coerce_value::<Vec<Duration>>("1m,500ms").unwrap(),
            [Duration::from_secs(60), Duration::from_millis(500)]
        );
    }

    #[test]
    fn element_error_aborts_the_list() {
        let err = coerce_value::<Vec<i32>>("1,x,3").unwrap_err();
        assert!(matches!(err, CoerceError::Scan { .. }));
    }

    #[test]
    fn emptiness_reports_absent() {
        assert!(Vec::<i32>::new().is_absent());
        assert!(!vec![1].is_absent());
    }
}
