//! Random permutations of a contiguous integer range.
//!
//! The Fisher-Yates shuffle in this module also backs the deterministic
//! fallback paths of the unique sampler and the graph generator.

use std::ops::Index;

use rand::Rng;

use crate::error::{GenError, Result};

/// Fisher-Yates shuffle. Each of the `n!` orderings is equally likely.
pub(crate) fn shuffle_in_place<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// A uniformly random ordering of the integers `{base, .., base + n - 1}`.
///
/// # Examples
/// ```
/// use ikura_core::Permutation;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(5);
/// let perm = Permutation::generate(5, 1, &mut rng).expect("bounds fit in i64");
/// let mut sorted: Vec<i64> = perm.values().to_vec();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    values: Vec<i64>,
    base: i64,
}

impl Permutation {
    /// Generates a uniformly random ordering of `n` consecutive integers
    /// starting at `base`.
    ///
    /// `n = 0` yields an empty sequence; `n = 1` yields the single value
    /// `base`.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidRange`] when `base + n - 1` does not fit in
    /// an `i64`.
    pub fn generate<R: Rng + ?Sized>(n: usize, base: i64, rng: &mut R) -> Result<Self> {
        let span = i64::try_from(n)
            .ok()
            .and_then(|count| base.checked_add(count.saturating_sub(1)));
        if n > 0 && span.is_none() {
            return Err(GenError::InvalidRange {
                lo: base.to_string(),
                hi: format!("{base} + {n} - 1"),
            });
        }

        let mut values: Vec<i64> = (0..n).map(|offset| base + offset as i64).collect();
        shuffle_in_place(&mut values, rng);
        Ok(Self { values, base })
    }

    /// Returns the permuted values.
    #[must_use]
    #[rustfmt::skip]
    pub fn values(&self) -> &[i64] { &self.values }

    /// Returns the first value of the underlying contiguous range.
    #[must_use]
    #[rustfmt::skip]
    pub fn base(&self) -> i64 { self.base }

    /// Returns the number of values.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` when the permutation is empty.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns an iterator over the permuted values.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }
}

impl Index<usize> for Permutation {
    type Output = i64;

    fn index(&self, position: usize) -> &i64 {
        &self.values[position]
    }
}
