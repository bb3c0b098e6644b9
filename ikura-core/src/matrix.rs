//! Random matrices of independent draws.

use rand::Rng;

use crate::{domain::Domain, scalar::Scalar};

/// An `rows x cols` grid of independent draws, stored row-major.
///
/// There is no cross-cell invariant; the matrix is a thin 2D extension of a
/// domain draw.
///
/// # Examples
/// ```
/// use ikura_core::{Domain, Matrix, Range};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let domain = Domain::from(Range::new(1, 10).expect("bounds are ordered"));
/// let mut rng = SmallRng::seed_from_u64(4);
/// let matrix = Matrix::generate(3, 4, &domain, &mut rng);
/// assert_eq!(matrix.rows(), 3);
/// assert_eq!(matrix.cols(), 4);
/// assert!(matrix.get(2, 3).is_some());
/// assert!(matrix.get(3, 0).is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Generates an `rows x cols` matrix of independent draws from `domain`.
    /// Zero rows or columns yield an empty matrix.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        domain: &Domain<T>,
        rng: &mut R,
    ) -> Self {
        let cells = rows.saturating_mul(cols);
        let data = (0..cells).map(|_| domain.pick(rng)).collect();
        Self { rows, cols, data }
    }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn rows(&self) -> usize { self.rows }

    /// Returns the number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn cols(&self) -> usize { self.cols }

    /// Returns row `row` as a slice, `None` when out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// Returns the cell at `(row, col)`, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if col >= self.cols {
            return None;
        }
        self.row(row).and_then(|cells| cells.get(col).copied())
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}
