//! Random labeled trees via incremental parent attachment.
//!
//! Each new node attaches as a leaf under a uniformly chosen existing node,
//! so the structure is connected and acyclic by construction and no
//! cycle-detection pass is needed. Nodes are stored arena-style and addressed
//! by index; node 0 is always the root.

use rand::Rng;
use tracing::instrument;

use crate::{
    domain::Range,
    error::{GenError, Result},
    scalar::Scalar,
};

/// A parent edge in a generated tree, in child order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeEdge<W: Scalar> {
    child: usize,
    parent: usize,
    weight: Option<W>,
}

impl<W: Scalar> TreeEdge<W> {
    /// Returns the child endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn child(&self) -> usize { self.child }

    /// Returns the parent endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> usize { self.parent }

    /// Returns the edge weight, `None` for unweighted trees.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Option<W> { self.weight }
}

/// A random general tree on `n` labeled nodes, rooted at node 0.
///
/// # Examples
/// ```
/// use ikura_core::Tree;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(9);
/// let tree = Tree::<i64>::generate(5, None, &mut rng).expect("node count is positive");
/// assert_eq!(tree.node_count(), 5);
/// assert_eq!(tree.edges().len(), 4);
/// assert_eq!(tree.parent(tree.root()), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<W: Scalar> {
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    edges: Vec<TreeEdge<W>>,
}

impl<W: Scalar> Tree<W> {
    /// Generates a random tree on `n` nodes, optionally edge-weighted.
    ///
    /// For each node `k` in `1..n` a parent is drawn uniformly from
    /// `0..k`, which keeps every intermediate structure a tree. When
    /// `weights` is supplied each edge receives an independent draw from it.
    ///
    /// # Errors
    /// Returns [`GenError::EmptyStructure`] when `n == 0`.
    #[instrument(level = "debug", skip(weights, rng))]
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        weights: Option<Range<W>>,
        rng: &mut R,
    ) -> Result<Self> {
        if n == 0 {
            return Err(GenError::EmptyStructure);
        }

        let mut parents: Vec<Option<usize>> = vec![None; n];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut edges = Vec::with_capacity(n - 1);

        for child in 1..n {
            let parent = rng.gen_range(0..child);
            parents[child] = Some(parent);
            children[parent].push(child);
            edges.push(TreeEdge {
                child,
                parent,
                weight: weights.as_ref().map(|range| range.sample(rng)),
            });
        }

        Ok(Self {
            parents,
            children,
            edges,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.parents.len() }

    /// Returns the root node index, always 0.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { 0 }

    /// Returns the parent of `node`, `None` for the root or an out-of-bounds
    /// index.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    /// Returns the children of `node` in attachment order.
    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        self.children.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns the parent edges in child order (node 1 first).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge<W>] { &self.edges }
}
