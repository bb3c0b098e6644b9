//! Random strings drawn from a character domain.

use std::fmt;

use rand::Rng;

use crate::domain::Domain;

/// A string of independent character draws from a range or character set.
///
/// # Examples
/// ```
/// use ikura_core::{Domain, RandomString, Range};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let domain = Domain::from(Range::new('A', 'Z').expect("bounds are ordered"));
/// let mut rng = SmallRng::seed_from_u64(20);
/// let word = RandomString::generate(8, &domain, &mut rng);
/// assert_eq!(word.char_count(), 8);
/// assert!(word.as_str().chars().all(|c| c.is_ascii_uppercase()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomString {
    value: String,
}

impl RandomString {
    /// Generates a string of `len` independent draws from `domain`.
    pub fn generate<R: Rng + ?Sized>(len: usize, domain: &Domain<char>, rng: &mut R) -> Self {
        let value = (0..len).map(|_| domain.pick(rng)).collect();
        Self { value }
    }

    /// Returns the generated text.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.value }

    /// Returns the number of characters drawn.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns `true` when no characters were requested.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.value.is_empty() }
}

impl fmt::Display for RandomString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
