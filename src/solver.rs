use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::graph::{Graph, VertexId};
use crate::search::clique_bnb::{CliqueBnb, DeadlineReached, SearchStatistics};
use crate::search::coloring::{color_classes, ColoringStrategy};
use crate::search::lp::{GoodLpSolver, LpSolver};
use crate::search::relaxation::RelaxationProblem;
use crate::search::stopping::{StoppingCriterion, TimeStoppingCriterion};


/** parameters of a maximum clique search */
#[derive(Debug, Clone, Serialize)]
pub struct SearchConfig {
    /// time limit in seconds (None: no limit)
    pub time_limit: Option<f32>,
    /// colorings used to build the color class rows
    pub strategies: Vec<ColoringStrategy>,
    /// seed of the random sequential coloring
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            strategies: ColoringStrategy::DEFAULT.to_vec(),
            seed: 0,
        }
    }
}

/** a maximum clique */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaxClique {
    /// number of vertices
    pub size: usize,
    /// vertices (pairwise adjacent, increasing)
    pub vertices: Vec<VertexId>,
}

/** how a search ended */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    /// the search completed: the clique is maximum
    Optimal(MaxClique),
    /// the time limit was reached before the search completed (no answer is guaranteed)
    TimedOut,
    /// the search completed without any integral node (every relaxation failed)
    NotFound,
}

/** outcome and counters of a search */
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// how the search ended
    pub outcome: SearchOutcome,
    /// branch & bound counters
    pub statistics: SearchStatistics,
    /// number of color class rows
    pub nb_color_classes: usize,
    /// total time (colorings included) in seconds
    pub time_total: f32,
}

/** finds a maximum clique with the LP based branch & bound */
pub fn find_max_clique(graph:&Graph, config:&SearchConfig) -> SearchReport {
    let stopping = config.time_limit.map(TimeStoppingCriterion::new);
    find_max_clique_with(graph, config, GoodLpSolver, stopping)
}

/** same as find_max_clique, with a given LP solver and stopping criterion */
pub fn find_max_clique_with<S:LpSolver, C:StoppingCriterion>(
    graph:&Graph,
    config:&SearchConfig,
    solver:S,
    stopping:C,
) -> SearchReport {
    let t_start = Instant::now();
    if graph.nb_vertices() == 0 {
        return SearchReport {
            outcome: SearchOutcome::Optimal(MaxClique { size:0, vertices:Vec::new() }),
            statistics: SearchStatistics::default(),
            nb_color_classes: 0,
            time_total: t_start.elapsed().as_secs_f32(),
        };
    }
    let classes = color_classes(graph, &config.strategies, config.seed);
    let root = RelaxationProblem::new(graph, &classes);
    info!(
        "relaxation built: {} variables, {} rows ({} color classes)",
        root.nb_variables(), root.constraints().len(), classes.len()
    );
    let mut bnb = CliqueBnb::new(graph, solver, stopping);
    let res = bnb.run(root);
    let statistics = bnb.into_statistics();
    let outcome = match res {
        Ok(Some(candidate)) => {
            let vertices = candidate.vertices();
            info!("maximum clique: {} vertices ({} nodes)", candidate.size, statistics.nb_nodes);
            SearchOutcome::Optimal(MaxClique { size:vertices.len(), vertices })
        },
        Ok(None) => {
            info!("no clique found ({} nodes)", statistics.nb_nodes);
            SearchOutcome::NotFound
        },
        Err(DeadlineReached) => {
            info!("time limit reached ({} nodes)", statistics.nb_nodes);
            SearchOutcome::TimedOut
        },
    };
    SearchReport {
        outcome,
        statistics,
        nb_color_classes: classes.len(),
        time_total: t_start.elapsed().as_secs_f32(),
    }
}
