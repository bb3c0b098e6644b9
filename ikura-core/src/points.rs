//! Random coordinate sets over a 2D integer range.

use std::ops::Index;

use rand::Rng;

use crate::domain::Range;

/// A set of independently drawn coordinate pairs. Duplicates are permitted;
/// there is no uniqueness invariant.
///
/// # Examples
/// ```
/// use ikura_core::{PointSet, Range};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let bounds = Range::new(1, 10).expect("bounds are ordered");
/// let mut rng = SmallRng::seed_from_u64(8);
/// let points = PointSet::in_square(5, &bounds, &mut rng);
/// assert_eq!(points.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<(i64, i64)>,
}

impl PointSet {
    /// Generates `n` points with x drawn from `x_bounds` and y from
    /// `y_bounds`.
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        x_bounds: &Range<i64>,
        y_bounds: &Range<i64>,
        rng: &mut R,
    ) -> Self {
        let points = (0..n)
            .map(|_| (x_bounds.sample(rng), y_bounds.sample(rng)))
            .collect();
        Self { points }
    }

    /// Generates `n` points with both axes drawn from the same bounds.
    pub fn in_square<R: Rng + ?Sized>(n: usize, bounds: &Range<i64>, rng: &mut R) -> Self {
        Self::generate(n, bounds, bounds, rng)
    }

    /// Returns the points in draw order.
    #[must_use]
    #[rustfmt::skip]
    pub fn points(&self) -> &[(i64, i64)] { &self.points }

    /// Returns the number of points.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.points.len() }

    /// Returns `true` when no points were requested.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

impl Index<usize> for PointSet {
    type Output = (i64, i64);

    fn index(&self, position: usize) -> &(i64, i64) {
        &self.points[position]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::domain::Range;

    use super::PointSet;

    #[test]
    fn points_stay_within_their_axis_bounds() {
        let x_bounds = Range::new(-5, 5).expect("bounds are ordered");
        let y_bounds = Range::new(100, 200).expect("bounds are ordered");
        let mut rng = SmallRng::seed_from_u64(40);
        let points = PointSet::generate(50, &x_bounds, &y_bounds, &mut rng);
        assert_eq!(points.len(), 50);
        for &(x, y) in points.points() {
            assert!((-5..=5).contains(&x));
            assert!((100..=200).contains(&y));
        }
    }

    #[test]
    fn square_helper_uses_one_range_for_both_axes() {
        let bounds = Range::new(1, 10).expect("bounds are ordered");
        let mut rng = SmallRng::seed_from_u64(41);
        let points = PointSet::in_square(20, &bounds, &mut rng);
        for &(x, y) in points.points() {
            assert!((1..=10).contains(&x));
            assert!((1..=10).contains(&y));
        }
    }

    #[test]
    fn zero_points_yield_an_empty_set() {
        let bounds = Range::new(0, 0).expect("degenerate range is valid");
        let mut rng = SmallRng::seed_from_u64(42);
        let points = PointSet::in_square(0, &bounds, &mut rng);
        assert!(points.is_empty());
    }
}
