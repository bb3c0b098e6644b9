//! Shared test utilities used across ikura crates.

pub mod structure {
    //! Structural invariant checkers for generated trees and graphs.
    //!
    //! The checkers work on plain `(usize, usize)` edge lists so every crate
    //! can use them without depending on the core types. Violations panic,
    //! which is the behaviour tests want.

    /// Union-find over `0..n` with path halving and union by rank.
    #[derive(Clone, Debug)]
    pub struct DisjointSet {
        parent: Vec<usize>,
        rank: Vec<u8>,
    }

    impl DisjointSet {
        /// Creates `n` singleton components.
        #[must_use]
        pub fn new(n: usize) -> Self {
            Self {
                parent: (0..n).collect(),
                rank: vec![0; n],
            }
        }

        /// Returns the representative of `node`'s component.
        pub fn find(&mut self, mut node: usize) -> usize {
            while self.parent[node] != node {
                let grandparent = self.parent[self.parent[node]];
                self.parent[node] = grandparent;
                node = grandparent;
            }
            node
        }

        /// Merges the components of `left` and `right`; returns `false` when
        /// they were already connected.
        pub fn union(&mut self, left: usize, right: usize) -> bool {
            let mut left_root = self.find(left);
            let mut right_root = self.find(right);
            if left_root == right_root {
                return false;
            }
            if self.rank[left_root] < self.rank[right_root] {
                std::mem::swap(&mut left_root, &mut right_root);
            }
            self.parent[right_root] = left_root;
            if self.rank[left_root] == self.rank[right_root] {
                self.rank[left_root] = self.rank[left_root].saturating_add(1);
            }
            true
        }
    }

    /// Counts the connected components induced by `edges` over `node_count`
    /// nodes. Panics when an edge endpoint is out of bounds.
    #[must_use]
    pub fn components(node_count: usize, edges: &[(usize, usize)]) -> usize {
        let mut sets = DisjointSet::new(node_count);
        for &(left, right) in edges {
            assert!(left < node_count, "edge endpoint {left} out of bounds");
            assert!(right < node_count, "edge endpoint {right} out of bounds");
            let _ = sets.union(left, right);
        }
        let mut roots: Vec<usize> = (0..node_count).map(|node| sets.find(node)).collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }

    /// Asserts that `edges` form a spanning tree over `node_count` nodes:
    /// exactly `n - 1` edges, no cycles, every node reachable.
    pub fn assert_spanning_tree(node_count: usize, edges: &[(usize, usize)]) {
        assert_eq!(
            edges.len(),
            node_count.saturating_sub(1),
            "a tree on {node_count} nodes needs {} edges",
            node_count.saturating_sub(1)
        );
        let mut sets = DisjointSet::new(node_count);
        for &(left, right) in edges {
            assert!(left < node_count, "edge endpoint {left} out of bounds");
            assert!(right < node_count, "edge endpoint {right} out of bounds");
            assert!(
                sets.union(left, right),
                "edge ({left}, {right}) closes a cycle"
            );
        }
        if node_count > 0 {
            let root = sets.find(0);
            for node in 1..node_count {
                assert_eq!(sets.find(node), root, "node {node} is unreachable");
            }
        }
    }

    /// Asserts that `edges` describe a simple undirected graph in canonical
    /// form: every pair ordered `(min, max)`, in bounds, no self-loops, no
    /// duplicates.
    pub fn assert_simple_graph(node_count: usize, edges: &[(usize, usize)]) {
        let mut seen = std::collections::HashSet::new();
        for &(left, right) in edges {
            assert!(left < right, "edge ({left}, {right}) is not canonical");
            assert!(right < node_count, "edge endpoint {right} out of bounds");
            assert!(
                seen.insert((left, right)),
                "duplicate edge ({left}, {right})"
            );
        }
    }
}

pub mod rng {
    //! Degenerate random sources for forcing worst-case generator paths.

    use rand::{Error, RngCore};

    /// A source whose every draw is zero.
    ///
    /// Uniform draws collapse to the lower bound, so rejection loops that
    /// need fresh values never advance and attempt budgets run out
    /// deterministically.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }
}

pub mod tracing_setup {
    //! One-shot tracing initialisation for tests that want visible
    //! diagnostics from instrumented generators.

    use std::sync::OnceLock;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    static INITIALISED: OnceLock<()> = OnceLock::new();

    /// Installs a compact fmt subscriber writing to the test-captured
    /// stderr. Safe to call from every test; only the first call installs.
    pub fn init() {
        INITIALISED.get_or_init(|| {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_test_writer()
                .compact();
            let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
        });
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;
    use rstest::rstest;

    use super::rng::ZeroRng;
    use super::structure::{assert_simple_graph, assert_spanning_tree, components};

    #[test]
    fn zero_rng_always_draws_the_lower_bound() {
        let mut rng = ZeroRng;
        for _ in 0..8 {
            assert_eq!(rng.gen_range(3..100), 3);
            assert_eq!(rng.gen_range(0..=7), 0);
        }
    }

    #[rstest]
    #[case(4, vec![(0, 1), (1, 2), (2, 3)], 1)]
    #[case(4, vec![(0, 1), (2, 3)], 2)]
    #[case(3, vec![], 3)]
    fn components_counts_connected_pieces(
        #[case] node_count: usize,
        #[case] edges: Vec<(usize, usize)>,
        #[case] expected: usize,
    ) {
        assert_eq!(components(node_count, &edges), expected);
    }

    #[test]
    fn spanning_tree_accepts_a_valid_tree() {
        assert_spanning_tree(4, &[(0, 1), (0, 2), (2, 3)]);
        assert_spanning_tree(1, &[]);
    }

    #[test]
    #[should_panic(expected = "closes a cycle")]
    fn spanning_tree_rejects_cycles() {
        // Three edges match n - 1 for four nodes, but (0, 2) closes a cycle
        // and leaves node 3 unreachable.
        assert_spanning_tree(4, &[(0, 1), (1, 2), (0, 2)]);
    }

    #[test]
    #[should_panic(expected = "needs")]
    fn spanning_tree_rejects_wrong_edge_count() {
        assert_spanning_tree(4, &[(0, 1)]);
    }

    #[test]
    fn simple_graph_accepts_canonical_edges() {
        assert_simple_graph(4, &[(0, 1), (0, 3), (2, 3)]);
    }

    #[test]
    #[should_panic(expected = "not canonical")]
    fn simple_graph_rejects_self_loops() {
        assert_simple_graph(3, &[(1, 1)]);
    }

    #[test]
    #[should_panic(expected = "duplicate edge")]
    fn simple_graph_rejects_duplicates() {
        assert_simple_graph(3, &[(0, 1), (0, 1)]);
    }
}
