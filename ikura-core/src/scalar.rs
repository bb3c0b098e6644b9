//! The scalar capability shared by every generator.
//!
//! [`Scalar`] abstracts the handful of operations the generation engine needs
//! from a value type: uniform sampling between two bounds, counting the
//! distinct values between them, and enumerating those values when the domain
//! is small enough to materialise. Implementations cover the integer, float,
//! and character kinds the library generates.

use std::fmt;

use rand::Rng;

/// An orderable value the generators can draw uniformly from a closed range.
///
/// All methods take bounds that have already been validated (`lo <= hi` under
/// the type's ordering); [`crate::Range::new`] performs that validation.
pub trait Scalar: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    /// Draws one value uniformly from the closed interval `[lo, hi]`.
    fn sample_uniform<R: Rng + ?Sized>(lo: Self, hi: Self, rng: &mut R) -> Self;

    /// Counts the distinct values in `[lo, hi]`.
    ///
    /// Returns `None` for continuous types where the interval is effectively
    /// unbounded (non-degenerate float ranges).
    fn cardinality(lo: Self, hi: Self) -> Option<u128>;

    /// Materialises every distinct value in `[lo, hi]` in increasing order.
    ///
    /// Returns `None` when the domain is continuous or too large to hold in
    /// memory; callers must then rely on rejection sampling alone.
    fn enumerate(lo: Self, hi: Self) -> Option<Vec<Self>>;
}

macro_rules! impl_scalar_for_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                fn sample_uniform<R: Rng + ?Sized>(lo: Self, hi: Self, rng: &mut R) -> Self {
                    rng.gen_range(lo..=hi)
                }

                fn cardinality(lo: Self, hi: Self) -> Option<u128> {
                    let span = i128::from(hi) - i128::from(lo);
                    Some(span.unsigned_abs() + 1)
                }

                fn enumerate(lo: Self, hi: Self) -> Option<Vec<Self>> {
                    let count = Self::cardinality(lo, hi)?;
                    if count > isize::MAX as u128 {
                        return None;
                    }
                    Some((lo..=hi).collect())
                }
            }
        )+
    };
}

impl_scalar_for_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_scalar_for_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                fn sample_uniform<R: Rng + ?Sized>(lo: Self, hi: Self, rng: &mut R) -> Self {
                    if lo == hi {
                        return lo;
                    }
                    rng.gen_range(lo..=hi)
                }

                fn cardinality(lo: Self, hi: Self) -> Option<u128> {
                    (lo == hi).then_some(1)
                }

                fn enumerate(lo: Self, hi: Self) -> Option<Vec<Self>> {
                    (lo == hi).then(|| vec![lo])
                }
            }
        )+
    };
}

impl_scalar_for_float!(f32, f64);

/// First code point of the UTF-16 surrogate gap.
const SURROGATE_LO: u32 = 0xD800;
/// Last code point of the UTF-16 surrogate gap.
const SURROGATE_HI: u32 = 0xDFFF;

impl Scalar for char {
    fn sample_uniform<R: Rng + ?Sized>(lo: Self, hi: Self, rng: &mut R) -> Self {
        // The bounds themselves are valid chars, so the rejection loop always
        // has at least one accepting draw; only the surrogate gap is skipped.
        loop {
            let raw = rng.gen_range(lo as u32..=hi as u32);
            if let Some(value) = char::from_u32(raw) {
                return value;
            }
        }
    }

    fn cardinality(lo: Self, hi: Self) -> Option<u128> {
        let span = u128::from(hi as u32 - lo as u32) + 1;
        let gap_lo = SURROGATE_LO.max(lo as u32);
        let gap_hi = SURROGATE_HI.min(hi as u32);
        let gap = if gap_lo <= gap_hi {
            u128::from(gap_hi - gap_lo) + 1
        } else {
            0
        };
        Some(span - gap)
    }

    fn enumerate(lo: Self, hi: Self) -> Option<Vec<Self>> {
        Some((lo..=hi).collect())
    }
}
