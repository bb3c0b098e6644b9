//! Property-based tests for the random graph generator.
//!
//! Samples node counts and edge densities across the whole feasible space,
//! seeding the generator through `SmallRng` so every failure shrinks to a
//! reproducible `(n, m, seed)` triple.

use ikura_test_support::structure::assert_simple_graph;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::domain::Range;

use super::{Graph, max_edges};

/// Generates `(n, m, seed)` with `m` uniform over the feasible edge counts.
fn graph_params() -> impl Strategy<Value = (usize, usize, u64)> {
    (0usize..=32, any::<u64>(), any::<u64>()).prop_map(|(n, edge_pick, seed)| {
        let max = usize::try_from(max_edges(n)).unwrap_or(usize::MAX);
        let m = if max == 0 { 0 } else { (edge_pick as usize) % (max + 1) };
        (n, m, seed)
    })
}

proptest! {
    #[test]
    fn generated_graphs_hold_exactly_m_simple_edges((n, m, seed) in graph_params()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = Graph::<i64>::generate(n, m, None, &mut rng)
            .expect("m is within the feasible range");
        prop_assert_eq!(graph.node_count(), n);
        prop_assert_eq!(graph.edge_count(), m);
        let pairs: Vec<(usize, usize)> =
            graph.edges().iter().map(|edge| (edge.a(), edge.b())).collect();
        assert_simple_graph(n, &pairs);
    }

    #[test]
    fn weighted_graphs_keep_weights_in_range((n, m, seed) in graph_params()) {
        let weights = Range::new(-50_i64, 50).expect("bounds are ordered");
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = Graph::generate(n, m, Some(weights), &mut rng)
            .expect("m is within the feasible range");
        for edge in graph.edges() {
            let weight = edge.weight().expect("weighted graph edges carry weights");
            prop_assert!((-50..=50).contains(&weight));
        }
    }

    #[test]
    fn requests_above_the_maximum_fail(n in 0usize..=32, excess in 1usize..=10, seed in any::<u64>()) {
        let max = usize::try_from(max_edges(n)).unwrap_or(usize::MAX - 10);
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = Graph::<i64>::generate(n, max + excess, None, &mut rng);
        prop_assert!(result.is_err());
    }
}
