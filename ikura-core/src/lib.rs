//! ikura core library.
//!
//! A random-structure generation engine: permutations, duplicate-free
//! samples, general and binary trees, simple graphs with exact edge counts,
//! plus thin matrix, string, and coordinate generators. Every generator
//! draws scalars from a borrowed [`rand::Rng`], checks its preconditions
//! eagerly, and returns a fully materialised, immutable structure.
//!
//! # Examples
//! ```
//! use ikura_core::{Graph, Tree, source};
//!
//! let mut rng = source::seeded(42);
//! let tree = Tree::<i64>::generate(5, None, &mut rng).expect("node count is positive");
//! assert_eq!(tree.edges().len(), 4);
//!
//! let graph = Graph::<i64>::generate(5, 7, None, &mut rng).expect("7 of 10 edges fit");
//! assert_eq!(graph.edge_count(), 7);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod binary_tree;
mod domain;
mod error;
mod graph;
mod matrix;
mod permutation;
mod points;
mod scalar;
mod text;
mod tree;
mod unique;

pub use crate::{
    binary_tree::{BinaryEdge, BinaryTree, Side},
    domain::{CandidateSet, Domain, Range, pick_one},
    error::{GenError, GenErrorCode, Result},
    graph::{Graph, GraphEdge, max_edges},
    matrix::Matrix,
    permutation::Permutation,
    points::PointSet,
    scalar::Scalar,
    text::RandomString,
    tree::{Tree, TreeEdge},
    unique::UniqueCollection,
};

pub mod source {
    //! Uniform source construction helpers.
    //!
    //! Generators accept any [`rand::Rng`]; these helpers build the `SmallRng`
    //! the library recommends, either seeded for reproducibility or from OS
    //! entropy. One source instance must not be shared across threads without
    //! external serialisation.

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// Builds a deterministic source from a fixed seed.
    ///
    /// # Examples
    /// ```
    /// use ikura_core::{Permutation, source};
    ///
    /// let mut left = source::seeded(7);
    /// let mut right = source::seeded(7);
    /// let a = Permutation::generate(6, 0, &mut left).expect("bounds fit");
    /// let b = Permutation::generate(6, 0, &mut right).expect("bounds fit");
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    /// Builds a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> SmallRng {
        SmallRng::from_entropy()
    }
}
