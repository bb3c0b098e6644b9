//! Random simple graphs with an exact edge count.
//!
//! Edges are held in canonical `(min, max)` form so duplicates and self-loops
//! are detectable. Sparse requests use rejection sampling; dense requests (or
//! a stalled sparse run) enumerate every candidate pair and shuffle, which
//! bounds worst-case work. Connectivity is not guaranteed, by design.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    domain::Range,
    error::{GenError, Result},
    permutation::shuffle_in_place,
    scalar::Scalar,
};

/// Rejection attempts allowed before the generator switches to the
/// enumerate-and-shuffle fallback.
fn attempt_budget(m: usize) -> usize {
    m.saturating_mul(16).saturating_add(64)
}

/// A canonical undirected edge, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge<W: Scalar> {
    a: usize,
    b: usize,
    weight: Option<W>,
}

impl<W: Scalar> GraphEdge<W> {
    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn a(&self) -> usize { self.a }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn b(&self) -> usize { self.b }

    /// Returns the edge weight, `None` for unweighted graphs.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Option<W> { self.weight }
}

/// A random simple undirected graph with `n` nodes and exactly `m` edges.
///
/// # Examples
/// ```
/// use ikura_core::Graph;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(2);
/// let graph = Graph::<i64>::generate(5, 7, None, &mut rng).expect("7 of 10 edges fit");
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<W: Scalar> {
    node_count: usize,
    edges: Vec<GraphEdge<W>>,
}

/// Maximum number of edges a simple graph on `n` nodes admits.
#[must_use]
pub fn max_edges(n: usize) -> u128 {
    let n = n as u128;
    n * n.saturating_sub(1) / 2
}

impl<W: Scalar> Graph<W> {
    /// Generates a random simple graph with exactly `m` edges, optionally
    /// edge-weighted. The result may be disconnected.
    ///
    /// # Errors
    /// Returns [`GenError::TooManyEdges`] when `m > n * (n - 1) / 2`.
    #[instrument(level = "debug", skip(weights, rng))]
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        m: usize,
        weights: Option<Range<W>>,
        rng: &mut R,
    ) -> Result<Self> {
        let max = max_edges(n);
        if m as u128 > max {
            return Err(GenError::TooManyEdges {
                requested: m,
                node_count: n,
                max,
            });
        }

        // At half density rejection acceptance drops below one half, so the
        // deterministic enumeration is both safer and cheaper.
        let pairs = if (m as u128).saturating_mul(2) >= max && m > 0 {
            debug!(n, m, "dense request, enumerating and shuffling the edge space");
            Self::select_dense(n, m, rng)
        } else {
            Self::select_sparse(n, m, max, rng)
        };

        let mut edges: Vec<GraphEdge<W>> = pairs
            .into_iter()
            .map(|(a, b)| GraphEdge {
                a,
                b,
                weight: weights.as_ref().map(|range| range.sample(rng)),
            })
            .collect();
        edges.sort_unstable_by_key(|edge| (edge.a, edge.b));

        Ok(Self {
            node_count: n,
            edges,
        })
    }

    /// Draws distinct node pairs until `m` canonical edges are accepted,
    /// handing over to the dense path if the retry budget runs out.
    fn select_sparse<R: Rng + ?Sized>(
        n: usize,
        m: usize,
        max: u128,
        rng: &mut R,
    ) -> Vec<(usize, usize)> {
        let budget = attempt_budget(m);
        let mut attempts = 0usize;
        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(m);
        let mut pairs = Vec::with_capacity(m);

        while pairs.len() < m {
            // `m * 2 < max` here, so acceptance stays above one half and the
            // budget is generous; the hand-over is a termination guarantee,
            // not an expected path.
            if attempts >= budget && usize::try_from(max).is_ok() {
                debug!(attempts, "rejection budget exhausted, switching to enumeration");
                return Self::select_dense(n, m, rng);
            }
            attempts = attempts.saturating_add(1);

            let left = rng.gen_range(0..n);
            let right = rng.gen_range(0..n);
            if left == right {
                continue;
            }
            let pair = (left.min(right), left.max(right));
            if seen.insert(pair) {
                pairs.push(pair);
            }
        }
        pairs
    }

    /// Enumerates every candidate pair, shuffles, and keeps the first `m`.
    fn select_dense<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
        for a in 0..n {
            for b in (a + 1)..n {
                pairs.push((a, b));
            }
        }
        shuffle_in_place(&mut pairs, rng);
        pairs.truncate(m);
        pairs
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the edges sorted by canonical endpoint pair.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge<W>] { &self.edges }

    /// Returns `true` when the graph contains the undirected edge
    /// `{left, right}`.
    #[must_use]
    pub fn contains_edge(&self, left: usize, right: usize) -> bool {
        let pair = (left.min(right), left.max(right));
        self.edges
            .binary_search_by_key(&pair, |edge| (edge.a, edge.b))
            .is_ok()
    }
}

#[cfg(test)]
mod property;
