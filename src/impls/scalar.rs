use crate::coerce::{Coerce, CoerceError};

// The `fmt.Sscan` analog: a whitespace-tolerant `FromStr` scan.
macro_rules! impl_scan_field {
    ($($ty:ty),* $(,)?) => {$(
        impl Coerce for $ty {
            fn coerce(source: &str) -> Result<Self, CoerceError> {
                source
                    .trim()
                    .parse()
                    .map_err(|err| CoerceError::scan::<$ty, _>(err))
            }
        }

        crate::impl_leaf_field!($ty);
    )*};
}

impl_scan_field!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
