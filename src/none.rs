//! None-ness of numeric values.
//!
//! A value is "none" when a sparse representation may drop it: exact
//! zero always, and NaN as well when `zero_nan` is requested.

/// Numeric types that can be tested for none-ness.
///
/// Implement this for value types that are not a single real scalar
/// (complex numbers, small fixed vectors) to use them with
/// [`isnone`] and [`DuplicatePolicy::resolve`](crate::DuplicatePolicy::resolve).
pub trait IsNone: Copy {
    /// Returns true if the value should be treated as absent.
    fn is_none_value(self, zero_nan: bool) -> bool;
}

macro_rules! impl_is_none_float {
    ($($t:ty),*) => {
        $(
            impl IsNone for $t {
                #[inline]
                fn is_none_value(self, zero_nan: bool) -> bool {
                    if zero_nan {
                        self.is_nan() || self == 0.0
                    } else {
                        self == 0.0
                    }
                }
            }
        )*
    };
}

// Integers have no NaN, so `zero_nan` changes nothing.
macro_rules! impl_is_none_int {
    ($($t:ty),*) => {
        $(
            impl IsNone for $t {
                #[inline]
                fn is_none_value(self, _zero_nan: bool) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_is_none_float!(f32, f64);
impl_is_none_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Returns true if `value` is zero, or NaN when `zero_nan` is set.
///
/// # Examples
///
/// ```
/// use spsparse::isnone;
///
/// assert!(isnone(0.0_f64, false));
/// assert!(!isnone(f64::NAN, false));
/// assert!(isnone(f64::NAN, true));
/// assert!(!isnone(2.5_f32, true));
/// ```
#[inline]
#[must_use]
pub fn isnone<T: IsNone>(value: T, zero_nan: bool) -> bool {
    value.is_none_value(zero_nan)
}
