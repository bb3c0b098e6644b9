//! Fixed-size collections of pairwise-distinct values.
//!
//! Range sampling is rejection-based while the requested count is small
//! relative to the domain, and switches to a shuffled enumeration when the
//! two are close. Candidate sets always draw by position, so repeated
//! entries keep their frequency weighting; a bounded attempt budget with a
//! deterministic completion pass guarantees termination either way.

use std::cmp::Ordering;
use std::ops::Index;

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    domain::Domain,
    error::{GenError, Result},
    permutation::shuffle_in_place,
    scalar::Scalar,
};

/// Rejection attempts allowed before the sampler switches to the
/// deterministic enumeration fallback.
fn attempt_budget(n: usize) -> usize {
    n.saturating_mul(16).saturating_add(64)
}

/// Inserts `value` into the sorted vector unless it is already present.
///
/// Values are self-equal by domain validation, so the comparator never sees
/// an unordered pair.
fn insert_if_absent<T: Scalar>(sorted: &mut Vec<T>, value: T) -> bool {
    let position =
        sorted.binary_search_by(|probe| probe.partial_cmp(&value).unwrap_or(Ordering::Equal));
    match position {
        Ok(_) => false,
        Err(index) => {
            sorted.insert(index, value);
            true
        }
    }
}

/// An ordered sequence of pairwise-distinct values drawn from a domain.
///
/// # Examples
/// ```
/// use ikura_core::{Domain, Range, UniqueCollection};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let domain = Domain::from(Range::new(1, 10).expect("bounds are ordered"));
/// let mut rng = SmallRng::seed_from_u64(17);
/// let sample = UniqueCollection::generate(5, &domain, &mut rng)
///     .expect("domain holds enough values");
/// assert_eq!(sample.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UniqueCollection<T: Scalar> {
    values: Vec<T>,
}

impl<T: Scalar> UniqueCollection<T> {
    /// Draws `n` pairwise-distinct values from `domain`.
    ///
    /// For candidate sets the draw is by position, so repeated entries raise
    /// a value's chance of being selected early; uniqueness is enforced on
    /// the values themselves.
    ///
    /// # Errors
    /// Returns [`GenError::DomainExhausted`] when `n` exceeds the number of
    /// distinct values the domain can provide.
    #[instrument(level = "debug", skip(domain, rng))]
    pub fn generate<R: Rng + ?Sized>(n: usize, domain: &Domain<T>, rng: &mut R) -> Result<Self> {
        if let Some(distinct) = domain.distinct_count() {
            if n as u128 > distinct {
                return Err(GenError::DomainExhausted {
                    requested: n,
                    distinct,
                });
            }
            // Near exhaustion, rejection acceptance drops below one half;
            // shuffle the whole range instead and keep a bounded worst case.
            // Candidate sets never take this shortcut: a shuffle over the
            // distinct values would erase their multiplicity weighting.
            if let Domain::Range(range) = domain {
                if (n as u128).saturating_mul(2) >= distinct {
                    if let Some(values) = range.enumerate() {
                        debug!(n, distinct, "dense range, shuffling full enumeration");
                        return Ok(Self::from_shuffled(values, n, rng));
                    }
                }
            }
        }

        Self::generate_by_rejection(n, domain, rng)
    }

    /// Shuffles the enumerated domain and truncates to the first `n` values.
    fn from_shuffled<R: Rng + ?Sized>(mut values: Vec<T>, n: usize, rng: &mut R) -> Self {
        shuffle_in_place(&mut values, rng);
        values.truncate(n);
        Self { values }
    }

    fn generate_by_rejection<R: Rng + ?Sized>(
        n: usize,
        domain: &Domain<T>,
        rng: &mut R,
    ) -> Result<Self> {
        let budget = attempt_budget(n);
        let mut attempts = 0usize;
        let mut sorted: Vec<T> = Vec::with_capacity(n);
        let mut values: Vec<T> = Vec::with_capacity(n);

        while values.len() < n {
            if attempts >= budget {
                // Only enumerable domains can stall the rejection loop for
                // long; continuous domains collide with probability zero.
                if let Some(remaining) = domain.enumerate_distinct() {
                    debug!(attempts, "rejection budget exhausted, completing deterministically");
                    Self::complete_from_enumeration(&mut values, &sorted, remaining, n, rng);
                    break;
                }
            }
            attempts = attempts.saturating_add(1);
            let candidate = domain.pick(rng);
            if insert_if_absent(&mut sorted, candidate) {
                values.push(candidate);
            }
        }

        Ok(Self { values })
    }

    /// Fills the remaining slots from a shuffled pass over the not-yet-chosen
    /// distinct values.
    fn complete_from_enumeration<R: Rng + ?Sized>(
        values: &mut Vec<T>,
        sorted: &[T],
        mut remaining: Vec<T>,
        n: usize,
        rng: &mut R,
    ) {
        remaining.retain(|value| {
            sorted
                .binary_search_by(|probe| probe.partial_cmp(value).unwrap_or(Ordering::Equal))
                .is_err()
        });
        shuffle_in_place(&mut remaining, rng);
        let missing = n.saturating_sub(values.len());
        values.extend(remaining.into_iter().take(missing));
    }

    /// Returns the chosen values in draw order.
    #[must_use]
    #[rustfmt::skip]
    pub fn values(&self) -> &[T] { &self.values }

    /// Returns the number of chosen values.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` when no values were requested.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns an iterator over the chosen values.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }
}

impl<T: Scalar> Index<usize> for UniqueCollection<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        &self.values[position]
    }
}

#[cfg(test)]
mod tests {
    use ikura_test_support::rng::ZeroRng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;

    use crate::{
        domain::{CandidateSet, Domain, Range},
        error::GenError,
    };

    use super::UniqueCollection;

    fn int_range(lo: i64, hi: i64) -> Domain<i64> {
        Range::new(lo, hi).expect("bounds are ordered").into()
    }

    fn assert_distinct<T: PartialEq + std::fmt::Debug>(values: &[T]) {
        for (index, value) in values.iter().enumerate() {
            assert!(
                !values[..index].contains(value),
                "duplicate value {value:?} at position {index}"
            );
        }
    }

    #[rstest]
    #[case(0, 1, 100)]
    #[case(1, 1, 1)]
    #[case(5, 1, 10)]
    #[case(50, 1, 100)]
    #[case(100, 1, 100)]
    fn yields_exactly_n_distinct_in_domain_values(
        #[case] n: usize,
        #[case] lo: i64,
        #[case] hi: i64,
    ) {
        let domain = int_range(lo, hi);
        let mut rng = SmallRng::seed_from_u64(31);
        let sample = UniqueCollection::generate(n, &domain, &mut rng).expect("domain is large enough");
        assert_eq!(sample.len(), n);
        assert_distinct(sample.values());
        assert!(sample.iter().all(|value| (lo..=hi).contains(&value)));
    }

    #[test]
    fn exact_domain_size_yields_a_permutation_of_the_domain() {
        let domain = int_range(1, 3);
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..40 {
            let sample = UniqueCollection::generate(3, &domain, &mut rng)
                .expect("count equals domain size");
            let mut values = sample.values().to_vec();
            values.sort_unstable();
            assert_eq!(values, vec![1, 2, 3]);
        }
    }

    #[test]
    fn fails_when_count_exceeds_distinct_values() {
        let domain = int_range(1, 4);
        let mut rng = SmallRng::seed_from_u64(0);
        let result = UniqueCollection::generate(5, &domain, &mut rng);
        assert!(matches!(
            result,
            Err(GenError::DomainExhausted {
                requested: 5,
                distinct: 4
            })
        ));
    }

    #[test]
    fn candidate_repeats_count_once_towards_capacity() {
        // Five entries but only two distinct values.
        let set = CandidateSet::new(vec![1, 1, 1, 2, 2]).expect("set is non-empty");
        let domain = Domain::from(set);
        let mut rng = SmallRng::seed_from_u64(4);

        let result = UniqueCollection::generate(3, &domain, &mut rng);
        assert!(matches!(
            result,
            Err(GenError::DomainExhausted {
                requested: 3,
                distinct: 2
            })
        ));

        let sample = UniqueCollection::generate(2, &domain, &mut rng).expect("two distinct exist");
        let mut values = sample.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn candidate_multiplicity_biases_single_draws() {
        // 1 fills three of the four positions, so a single unique draw must
        // land on it about three quarters of the time even though only two
        // distinct values exist.
        let set = CandidateSet::new(vec![1, 1, 1, 2]).expect("set is non-empty");
        let domain = Domain::from(set);
        let mut rng = SmallRng::seed_from_u64(64);
        let draws = 4000;
        let ones = (0..draws)
            .filter(|_| {
                let sample = UniqueCollection::generate(1, &domain, &mut rng)
                    .expect("one value always fits");
                sample[0] == 1
            })
            .count();
        let share = ones as f64 / draws as f64;
        assert!(
            (0.70..=0.80).contains(&share),
            "expected a share near 0.75, got {share}"
        );
    }

    #[test]
    fn budget_exhaustion_completes_from_the_remaining_values() {
        // A stuck source keeps drawing position 0, so after the attempt
        // budget runs out the last slot must be filled deterministically.
        let set = CandidateSet::new(vec![5, 5, 5, 7]).expect("set is non-empty");
        let domain = Domain::from(set);
        let mut rng = ZeroRng;
        let sample = UniqueCollection::generate(2, &domain, &mut rng).expect("two distinct exist");
        let mut values = sample.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, vec![5, 7]);
    }

    #[test]
    fn completion_skips_already_chosen_values() {
        let mut values = vec![4, 9];
        let sorted = vec![4, 9];
        let remaining = vec![1, 2, 4, 7, 9];
        let mut rng = SmallRng::seed_from_u64(3);
        UniqueCollection::complete_from_enumeration(&mut values, &sorted, remaining, 4, &mut rng);
        assert_eq!(values.len(), 4);
        assert_eq!(&values[..2], &[4, 9]);
        assert!(values[2..].iter().all(|value| [1, 2, 7].contains(value)));
        assert_distinct(&values);
    }

    #[test]
    fn char_ranges_sample_distinct_characters() {
        let domain: Domain<char> = Range::new('X', 'Z').expect("bounds are ordered").into();
        let mut rng = SmallRng::seed_from_u64(12);
        let sample = UniqueCollection::generate(3, &domain, &mut rng).expect("three chars exist");
        let mut values = sample.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, vec!['X', 'Y', 'Z']);
    }

    #[test]
    fn continuous_domains_sample_without_exhaustion_checks() {
        let domain: Domain<f64> = Range::new(0.0, 1.0).expect("bounds are ordered").into();
        let mut rng = SmallRng::seed_from_u64(21);
        let sample = UniqueCollection::generate(8, &domain, &mut rng).expect("continuous domain");
        assert_eq!(sample.len(), 8);
        assert_distinct(sample.values());
        assert!(sample.iter().all(|value| (0.0..=1.0).contains(&value)));
    }

    #[test]
    fn degenerate_float_range_exhausts_beyond_one_value() {
        let domain: Domain<f64> = Range::new(2.5, 2.5).expect("degenerate range is valid").into();
        let mut rng = SmallRng::seed_from_u64(2);
        assert!(UniqueCollection::generate(1, &domain, &mut rng).is_ok());
        let result = UniqueCollection::generate(2, &domain, &mut rng);
        assert!(matches!(result, Err(GenError::DomainExhausted { .. })));
    }
}
