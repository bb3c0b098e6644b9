//! Value domains the generators draw from.
//!
//! A [`Range`] is a validated closed interval; a [`CandidateSet`] is a
//! non-empty sequence of explicit values where repeats raise a value's
//! selection probability in proportion to its multiplicity. [`Domain`] is the
//! range-or-candidates parameter shape shared by the unique sampler, matrix,
//! and string generators.

use std::cmp::Ordering;

use rand::Rng;

use crate::{
    error::{GenError, Result},
    scalar::Scalar,
};

/// A validated closed interval `[lo, hi]`.
///
/// # Examples
/// ```
/// use ikura_core::Range;
///
/// let range = Range::new(1, 6).expect("bounds are ordered");
/// assert_eq!(range.lo(), 1);
/// assert_eq!(range.hi(), 6);
/// assert!(Range::new(6, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range<T: Scalar> {
    lo: T,
    hi: T,
}

impl<T: Scalar> Range<T> {
    /// Validates the bounds and constructs the range.
    ///
    /// # Errors
    /// Returns [`GenError::InvalidRange`] when `lo > hi` or when the bounds
    /// are unordered (NaN floats).
    pub fn new(lo: T, hi: T) -> Result<Self> {
        match lo.partial_cmp(&hi) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { lo, hi }),
            Some(Ordering::Greater) | None => Err(GenError::InvalidRange {
                lo: lo.to_string(),
                hi: hi.to_string(),
            }),
        }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub fn lo(&self) -> T { self.lo }

    /// Returns the inclusive upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub fn hi(&self) -> T { self.hi }

    /// Draws one value uniformly from the range.
    ///
    /// # Examples
    /// ```
    /// use ikura_core::Range;
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let range = Range::new('a', 'e').expect("bounds are ordered");
    /// let mut rng = SmallRng::seed_from_u64(3);
    /// assert!(('a'..='e').contains(&range.sample(&mut rng)));
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        T::sample_uniform(self.lo, self.hi, rng)
    }

    /// Counts the distinct values in the range, `None` when continuous.
    #[must_use]
    pub fn distinct_count(&self) -> Option<u128> {
        T::cardinality(self.lo, self.hi)
    }

    /// Materialises every distinct value in increasing order, `None` when the
    /// range is continuous or too large to hold in memory.
    #[must_use]
    pub fn enumerate(&self) -> Option<Vec<T>> {
        T::enumerate(self.lo, self.hi)
    }
}

/// A non-empty sequence of candidate values, repeats permitted.
///
/// Repeats are a deliberate frequency-weighting mechanism: the probability of
/// selecting a value is proportional to how many times it appears.
///
/// # Examples
/// ```
/// use ikura_core::CandidateSet;
///
/// let set = CandidateSet::new(vec!['X', 'O', 'O']).expect("set is non-empty");
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.distinct_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateSet<T: Scalar> {
    values: Vec<T>,
}

impl<T: Scalar> CandidateSet<T> {
    /// Validates and constructs the candidate set.
    ///
    /// # Errors
    /// Returns [`GenError::EmptyCandidateSet`] for an empty sequence and
    /// [`GenError::InvalidRange`] for entries that do not compare equal to
    /// themselves (NaN floats), which would defeat duplicate detection.
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(GenError::EmptyCandidateSet);
        }
        for value in &values {
            if value.partial_cmp(value).is_none() {
                return Err(GenError::InvalidRange {
                    lo: value.to_string(),
                    hi: value.to_string(),
                });
            }
        }
        Ok(Self { values })
    }

    /// Returns the candidate entries in supplied order, repeats included.
    #[must_use]
    #[rustfmt::skip]
    pub fn values(&self) -> &[T] { &self.values }

    /// Returns the number of entries, repeats included.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` when the set has no entries. Construction forbids this,
    /// so the method exists only to satisfy the `len`/`is_empty` convention.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Draws one entry uniformly by position, so repeated values are
    /// proportionally more likely.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[rng.gen_range(0..self.values.len())]
    }

    /// Counts the distinct values in the set.
    #[must_use]
    pub fn distinct_count(&self) -> u128 {
        self.distinct_values().len() as u128
    }

    /// Returns the distinct values in increasing order.
    #[must_use]
    pub fn distinct_values(&self) -> Vec<T> {
        let mut distinct = self.values.clone();
        // Entries are self-equal by construction, so partial_cmp never
        // returns None here.
        distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        distinct.dedup_by(|a, b| a == b);
        distinct
    }
}

/// The range-or-candidates parameter accepted by several generators.
///
/// # Examples
/// ```
/// use ikura_core::{Domain, Range};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let domain = Domain::from(Range::new(1, 10).expect("bounds are ordered"));
/// let mut rng = SmallRng::seed_from_u64(1);
/// assert!((1..=10).contains(&domain.pick(&mut rng)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Domain<T: Scalar> {
    /// Draw from a closed interval.
    Range(Range<T>),
    /// Draw from an explicit, possibly weighted, candidate sequence.
    Candidates(CandidateSet<T>),
}

impl<T: Scalar> From<Range<T>> for Domain<T> {
    fn from(range: Range<T>) -> Self {
        Self::Range(range)
    }
}

impl<T: Scalar> From<CandidateSet<T>> for Domain<T> {
    fn from(set: CandidateSet<T>) -> Self {
        Self::Candidates(set)
    }
}

impl<T: Scalar> Domain<T> {
    /// Draws one value from the domain. For candidate sets the draw is by
    /// position, which is what biases repeated values.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match self {
            Self::Range(range) => range.sample(rng),
            Self::Candidates(set) => set.pick(rng),
        }
    }

    /// Counts the distinct values available, `None` when continuous.
    #[must_use]
    pub fn distinct_count(&self) -> Option<u128> {
        match self {
            Self::Range(range) => range.distinct_count(),
            Self::Candidates(set) => Some(set.distinct_count()),
        }
    }

    /// Materialises the distinct values in increasing order when feasible.
    #[must_use]
    pub fn enumerate_distinct(&self) -> Option<Vec<T>> {
        match self {
            Self::Range(range) => range.enumerate(),
            Self::Candidates(set) => Some(set.distinct_values()),
        }
    }
}

/// Picks one element uniformly from an existing slice, `None` when empty.
///
/// This is the flat-container sampling the demo driver uses for values that
/// are not [`Scalar`]s (strings, for instance).
///
/// # Examples
/// ```
/// use ikura_core::pick_one;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let fruits = ["apple", "banana", "orange"];
/// let mut rng = SmallRng::seed_from_u64(2);
/// assert!(fruits.contains(pick_one(&fruits, &mut rng).expect("slice is non-empty")));
/// ```
pub fn pick_one<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;

    use crate::error::GenError;

    use super::{CandidateSet, Domain, Range, pick_one};

    #[test]
    fn range_rejects_inverted_bounds() {
        let result = Range::new(9, 2);
        assert!(matches!(result, Err(GenError::InvalidRange { .. })));
    }

    #[test]
    fn range_rejects_nan_bounds() {
        assert!(Range::new(f64::NAN, 1.0).is_err());
        assert!(Range::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn degenerate_range_always_yields_its_bound() {
        let range = Range::new(4, 4).expect("degenerate range is valid");
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(range.sample(&mut rng), 4);
        }
    }

    #[test]
    fn candidate_set_rejects_empty_input() {
        let result = CandidateSet::<i32>::new(Vec::new());
        assert!(matches!(result, Err(GenError::EmptyCandidateSet)));
    }

    #[test]
    fn candidate_set_rejects_nan_entries() {
        let result = CandidateSet::new(vec![1.0, f64::NAN]);
        assert!(matches!(result, Err(GenError::InvalidRange { .. })));
    }

    #[rstest]
    #[case(vec![1, 1, 2, 3, 3, 3], vec![1, 2, 3])]
    #[case(vec![5], vec![5])]
    #[case(vec![2, 2, 2], vec![2])]
    fn distinct_values_deduplicate_and_sort(
        #[case] entries: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        let set = CandidateSet::new(entries).expect("set is non-empty");
        assert_eq!(set.distinct_values(), expected);
    }

    #[test]
    fn repeated_entries_bias_selection_frequency() {
        // 'O' appears three times as often as 'X'; over many draws it must
        // dominate. A loose bound keeps the test deterministic enough.
        let set = CandidateSet::new(vec!['O', 'O', 'O', 'X']).expect("set is non-empty");
        let mut rng = SmallRng::seed_from_u64(99);
        let draws = 4000;
        let o_count = (0..draws).filter(|_| set.pick(&mut rng) == 'O').count();
        assert!(o_count > draws / 2, "expected 'O' majority, got {o_count}");
    }

    #[test]
    fn pick_one_is_none_only_for_empty_slices() {
        let mut rng = SmallRng::seed_from_u64(6);
        assert_eq!(pick_one::<i32, _>(&[], &mut rng), None);
        let items = ["aeiou"];
        assert_eq!(pick_one(&items, &mut rng), Some(&"aeiou"));
    }

    #[test]
    fn domain_reports_distinct_counts_per_variant() {
        let range: Domain<i64> = Range::new(1, 100).expect("bounds are ordered").into();
        assert_eq!(range.distinct_count(), Some(100));

        let set: Domain<i64> =
            CandidateSet::new(vec![7, 7, 8]).expect("set is non-empty").into();
        assert_eq!(set.distinct_count(), Some(2));

        let continuous: Domain<f64> = Range::new(0.0, 1.0).expect("bounds are ordered").into();
        assert_eq!(continuous.distinct_count(), None);
    }
}
