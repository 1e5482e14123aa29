//! Greedy colorings used to build the color-class rows of the relaxation.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::CliqueError;
use crate::graph::{Graph, VertexId};

/// first-fit colorings driven by a vertex ordering
pub mod sequential;

/// greedy DSATUR algorithm
pub mod greedy_dsatur;

/// Recursive Largest First algorithm (RLF)
pub mod greedy_rlf;

/** Solution of a graph coloring problem
(represented as a partition, each part being an independent set).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** greedy coloring heuristics */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColoringStrategy {
    /// vertices by decreasing degree, first fit
    LargestFirst,
    /// vertices in a random order, first fit
    RandomSequential,
    /// one maximal independent set after the other
    IndependentSet,
    /// breadth-first order of each connected component, first fit
    ConnectedSequentialBfs,
    /// depth-first order of each connected component, first fit
    ConnectedSequentialDfs,
    /// DSATUR
    SaturationLargestFirst,
    /// RLF
    RecursiveLargestFirst,
}

impl ColoringStrategy {
    /// strategies used when nothing else is asked for
    pub const DEFAULT:[ColoringStrategy ; 6] = [
        ColoringStrategy::LargestFirst,
        ColoringStrategy::RandomSequential,
        ColoringStrategy::IndependentSet,
        ColoringStrategy::ConnectedSequentialBfs,
        ColoringStrategy::ConnectedSequentialDfs,
        ColoringStrategy::SaturationLargestFirst,
    ];

    /// every available strategy
    pub const ALL:[ColoringStrategy ; 7] = [
        ColoringStrategy::LargestFirst,
        ColoringStrategy::RandomSequential,
        ColoringStrategy::IndependentSet,
        ColoringStrategy::ConnectedSequentialBfs,
        ColoringStrategy::ConnectedSequentialDfs,
        ColoringStrategy::SaturationLargestFirst,
        ColoringStrategy::RecursiveLargestFirst,
    ];

    /// name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            ColoringStrategy::LargestFirst => "largest-first",
            ColoringStrategy::RandomSequential => "random-sequential",
            ColoringStrategy::IndependentSet => "independent-set",
            ColoringStrategy::ConnectedSequentialBfs => "connected-sequential-bfs",
            ColoringStrategy::ConnectedSequentialDfs => "connected-sequential-dfs",
            ColoringStrategy::SaturationLargestFirst => "saturation-largest-first",
            ColoringStrategy::RecursiveLargestFirst => "recursive-largest-first",
        }
    }

    /// colors the graph (rng is only used by the random sequential strategy)
    pub fn color(&self, graph:&Graph, rng:&mut StdRng) -> Solution {
        match self {
            ColoringStrategy::LargestFirst =>
                sequential::first_fit(graph, &sequential::largest_first_order(graph)),
            ColoringStrategy::RandomSequential =>
                sequential::first_fit(graph, &sequential::random_order(graph, rng)),
            ColoringStrategy::IndependentSet =>
                sequential::first_fit(graph, &sequential::independent_set_order(graph)),
            ColoringStrategy::ConnectedSequentialBfs =>
                sequential::first_fit(graph, &sequential::bfs_order(graph)),
            ColoringStrategy::ConnectedSequentialDfs =>
                sequential::first_fit(graph, &sequential::dfs_order(graph)),
            ColoringStrategy::SaturationLargestFirst =>
                greedy_dsatur::greedy_dsatur(graph),
            ColoringStrategy::RecursiveLargestFirst =>
                greedy_rlf::greedy_rlf(graph),
        }
    }
}

impl fmt::Display for ColoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ColoringStrategy {
    type Err = CliqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
            .find(|strategy| strategy.name() == s.trim())
            .copied()
            .ok_or_else(|| CliqueError::UnknownStrategy(s.to_string()))
    }
}

/** runs every strategy on the graph and collects all the color classes.
Classes of different strategies are kept even if they are equal.
*/
pub fn color_classes(graph:&Graph, strategies:&[ColoringStrategy], seed:u64) -> Vec<Vec<VertexId>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut res = Vec::new();
    for strategy in strategies {
        let solution = strategy.color(graph, &mut rng);
        debug!("{}: {} colors", strategy, solution.len());
        res.extend(solution);
    }
    res
}

/**
returns None if the solution is not a proper coloring of the graph
returns the number of colors otherwise
*/
pub fn checker(graph:&Graph, sol:&[Vec<VertexId>]) -> Option<usize> {
    let mut visited = bit_set::BitSet::with_capacity(graph.nb_vertices());
    for c in sol {
        for v in c {
            if !visited.insert(*v) {
                return None;  // already added
            }
        }
    }
    if visited.len() != graph.nb_vertices() {
        return None;
    }
    if sol.iter().any(|c| c.is_empty() || !graph.is_independent_set(c)) {
        return None;
    }
    Some(sol.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_strategy_is_a_proper_coloring() {
        for seed in 0..10 {
            let g = Graph::random(30, 0.3, seed);
            let mut rng = StdRng::seed_from_u64(seed);
            for strategy in ColoringStrategy::ALL.iter() {
                let sol = strategy.color(&g, &mut rng);
                assert!(checker(&g, &sol).is_some(), "{} failed on seed {}", strategy, seed);
            }
        }
    }

    #[test]
    fn test_color_classes_are_independent_sets() {
        let g = Graph::random(25, 0.5, 42);
        let classes = color_classes(&g, &ColoringStrategy::DEFAULT, 7);
        assert!(!classes.is_empty());
        for c in &classes {
            assert!(g.is_independent_set(c));
        }
        // every strategy covers all the vertices
        let total:usize = classes.iter().map(|c| c.len()).sum();
        assert_eq!(total, 6 * 25);
    }

    #[test]
    fn test_classes_are_not_deduplicated() {
        // complete graph: every strategy yields the same singletons
        let edges:Vec<(usize,usize)> = (0..4).flat_map(|u| (u+1..4).map(move |v| (u,v))).collect();
        let g = Graph::from_edges(4, &edges);
        let classes = color_classes(&g, &ColoringStrategy::DEFAULT, 0);
        assert_eq!(classes.len(), 6 * 4);
    }

    #[test]
    fn test_edgeless_graph_uses_one_color() {
        let g = Graph::from_edges(5, &[]);
        let mut rng = StdRng::seed_from_u64(0);
        for strategy in ColoringStrategy::ALL.iter() {
            assert_eq!(strategy.color(&g, &mut rng).len(), 1, "{}", strategy);
        }
    }

    #[test]
    fn test_strategy_names() {
        for strategy in ColoringStrategy::ALL.iter() {
            assert_eq!(&strategy.to_string().parse::<ColoringStrategy>().unwrap(), strategy);
        }
        assert!(matches!(
            "smallest-last".parse::<ColoringStrategy>(),
            Err(CliqueError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_checker_rejects_conflicts() {
        let g = Graph::from_edges(3, &[(0,1)]);
        assert_eq!(checker(&g, &[vec![0,2], vec![1]]), Some(2));
        assert_eq!(checker(&g, &[vec![0,1], vec![2]]), None);
        assert_eq!(checker(&g, &[vec![0], vec![1]]), None);
    }
}
