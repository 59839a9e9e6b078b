//! The numeric element kind accepted by the harness.
//!
//! Datasets are generic over one numeric kind, constrained to the integer and
//! floating-point primitives. Character-like kinds (`char`, `i8`, `u8`) and
//! `bool` are excluded: they sort, but comparing operation counts over them is
//! meaningless for this harness, so the trait is sealed against them.

use rand::distributions::uniform::SampleUniform;
use std::fmt::Display;
use std::str::FromStr;

mod private {
    pub trait Sealed {}
}

/// A numeric value a [`Dataset`](crate::Dataset) can hold.
///
/// Implemented for the signed/unsigned integers from 16 bits up and for
/// `f32`/`f64`. `RANGE_MIN`/`RANGE_MAX` are the default generation bounds.
pub trait SortValue:
    Copy + PartialOrd + Display + FromStr + SampleUniform + private::Sealed + Send + Sync + 'static
{
    /// Default lower generation bound.
    const RANGE_MIN: Self;
    /// Default upper generation bound.
    const RANGE_MAX: Self;
}

macro_rules! impl_sort_value_int {
    ($($t:ty),* $(,)?) => {$(
        impl private::Sealed for $t {}
        impl SortValue for $t {
            const RANGE_MIN: Self = <$t>::MIN;
            const RANGE_MAX: Self = <$t>::MAX;
        }
    )*};
}

impl_sort_value_int!(i16, i32, i64, u16, u32, u64, isize, usize);

// Floats do not default to the full representable span: the span of
// f64::MIN..=f64::MAX overflows the uniform sampler's range arithmetic.
// The bounds below are the exactly-representable integer spans instead.

impl private::Sealed for f32 {}
impl SortValue for f32 {
    const RANGE_MIN: Self = -16_777_216.0; // -(2^24)
    const RANGE_MAX: Self = 16_777_216.0; // 2^24
}

impl private::Sealed for f64 {}
impl SortValue for f64 {
    const RANGE_MIN: Self = -9_007_199_254_740_992.0; // -(2^53)
    const RANGE_MAX: Self = 9_007_199_254_740_992.0; // 2^53
}
