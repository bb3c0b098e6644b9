//! Random binary trees via capacity-constrained parent attachment.
//!
//! Extends the general tree construction with a two-child limit per node:
//! parents are drawn uniformly from the nodes that still have a free slot,
//! and the side tag is forced when only one slot remains.

use rand::Rng;
use tracing::instrument;

use crate::{
    domain::Range,
    error::{GenError, Result},
    scalar::Scalar,
};

/// The slot a binary-tree child occupies under its parent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// A parent edge in a generated binary tree, in child order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinaryEdge<W: Scalar> {
    child: usize,
    parent: usize,
    side: Side,
    weight: Option<W>,
}

impl<W: Scalar> BinaryEdge<W> {
    /// Returns the child endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn child(&self) -> usize { self.child }

    /// Returns the parent endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> usize { self.parent }

    /// Returns the slot the child occupies.
    #[must_use]
    #[rustfmt::skip]
    pub fn side(&self) -> Side { self.side }

    /// Returns the edge weight, `None` for unweighted trees.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Option<W> { self.weight }
}

/// A random tree on `n` labeled nodes where every node has at most two
/// children tagged left or right; node 0 is the root.
///
/// # Examples
/// ```
/// use ikura_core::BinaryTree;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(6);
/// let tree = BinaryTree::<f64>::generate(5, None, &mut rng).expect("node count is positive");
/// assert_eq!(tree.node_count(), 5);
/// assert_eq!(tree.edges().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryTree<W: Scalar> {
    left: Vec<Option<usize>>,
    right: Vec<Option<usize>>,
    parents: Vec<Option<(usize, Side)>>,
    edges: Vec<BinaryEdge<W>>,
}

impl<W: Scalar> BinaryTree<W> {
    /// Generates a random binary tree on `n` nodes, optionally edge-weighted.
    ///
    /// Each node `k` in `1..n` attaches under a parent drawn uniformly from
    /// the nodes with fewer than two children. A parent with one child hands
    /// the new node its free slot; with both slots free the side is drawn
    /// uniformly.
    ///
    /// # Errors
    /// Returns [`GenError::EmptyStructure`] when `n == 0`, and
    /// [`GenError::CapacityExhausted`] if the open-slot list ever empties —
    /// capacity grows by two per accepted node, so that check cannot fire
    /// for finite `n` and exists defensively.
    #[instrument(level = "debug", skip(weights, rng))]
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        weights: Option<Range<W>>,
        rng: &mut R,
    ) -> Result<Self> {
        if n == 0 {
            return Err(GenError::EmptyStructure);
        }

        let mut tree = Self {
            left: vec![None; n],
            right: vec![None; n],
            parents: vec![None; n],
            edges: Vec::with_capacity(n - 1),
        };

        // Nodes that still have at least one free child slot.
        let mut open: Vec<usize> = vec![0];
        for child in 1..n {
            // `max(1)` keeps the draw well-formed in the impossible empty
            // case; `get` then reports it as exhaustion instead of panicking.
            let Some(&parent) = open.get(rng.gen_range(0..open.len().max(1))) else {
                return Err(GenError::CapacityExhausted { node_count: n });
            };

            let Some(side) = tree.assign_slot(parent, child, rng) else {
                return Err(GenError::CapacityExhausted { node_count: n });
            };
            tree.parents[child] = Some((parent, side));
            tree.edges.push(BinaryEdge {
                child,
                parent,
                side,
                weight: weights.as_ref().map(|range| range.sample(rng)),
            });

            if tree.left[parent].is_some() && tree.right[parent].is_some() {
                open.retain(|&node| node != parent);
            }
            open.push(child);
        }

        Ok(tree)
    }

    /// Places `child` into a free slot of `parent` and returns the side used,
    /// or `None` when `parent` is already full and no link may be written.
    fn assign_slot<R: Rng + ?Sized>(
        &mut self,
        parent: usize,
        child: usize,
        rng: &mut R,
    ) -> Option<Side> {
        let side = match (self.left[parent], self.right[parent]) {
            (None, None) => {
                if rng.gen_bool(0.5) {
                    Side::Left
                } else {
                    Side::Right
                }
            }
            (None, Some(_)) => Side::Left,
            (Some(_), None) => Side::Right,
            // `generate` drops a parent from the open list the moment its
            // second slot fills, so a full parent never reaches this point.
            (Some(_), Some(_)) => return None,
        };
        match side {
            Side::Left => self.left[parent] = Some(child),
            Side::Right => self.right[parent] = Some(child),
        }
        Some(side)
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.parents.len() }

    /// Returns the root node index, always 0.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { 0 }

    /// Returns the parent and occupied side of `node`, `None` for the root.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<(usize, Side)> {
        self.parents.get(node).copied().flatten()
    }

    /// Returns the left child of `node`.
    #[must_use]
    pub fn left(&self, node: usize) -> Option<usize> {
        self.left.get(node).copied().flatten()
    }

    /// Returns the right child of `node`.
    #[must_use]
    pub fn right(&self, node: usize) -> Option<usize> {
        self.right.get(node).copied().flatten()
    }

    /// Returns the parent edges in child order (node 1 first).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[BinaryEdge<W>] { &self.edges }
}
