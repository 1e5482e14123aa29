use std::time::Instant;

use log::{debug, trace};
use serde::Serialize;

use crate::graph::{Graph, VertexId};
use super::incumbent::Incumbent;
use super::lp::{LpError, LpSolver};
use super::relaxation::{Fixing, RelaxationProblem};
use super::stopping::StoppingCriterion;


/** counters of a branch & bound run */
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStatistics {
    /// nodes whose relaxation was solved
    pub nb_nodes: usize,
    /// nodes discarded because their bound does not beat the incumbent
    pub nb_pruned: usize,
    /// infeasible nodes
    pub nb_infeasible: usize,
    /// nodes on which the LP solver failed
    pub nb_solver_errors: usize,
    /// nodes with an integral relaxation
    pub nb_integral: usize,
    /// deepest node
    pub max_depth: usize,
    /// successive incumbent values
    pub primal_list: Vec<usize>,
    /// seconds spent
    pub time_searched: f32,
}

/** integral relaxation solution, i.e. a clique */
#[derive(Debug, Clone, PartialEq)]
pub struct CliqueCandidate {
    /// clique size
    pub size: usize,
    /// value of each vertex variable (0 or 1)
    pub values: Vec<f64>,
}

impl CliqueCandidate {
    /// vertices whose variable is 1
    pub fn vertices(&self) -> Vec<VertexId> {
        self.values.iter().enumerate()
            .filter(|(_,x)| **x == 1.)
            .map(|(v,_)| v)
            .collect()
    }
}

/** the stopping criterion interrupted the search */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineReached;

/// true iff x is exactly 0 or 1
pub fn is_integral(x:f64) -> bool { x == 0. || x == 1. }

/// first variable (by index) whose value is fractional
pub fn branching_variable(values:&[f64]) -> Option<usize> {
    values.iter().position(|x| !is_integral(*x))
}


/**
Depth-first branch & bound for the maximum clique problem.
Each node solves its relaxation:
 - infeasible (or solver failure): dead node
 - bound ≤ incumbent: pruned
 - integral solution: new clique, becomes the incumbent
 - otherwise: the first fractional variable is fixed to 1, then to 0
*/
#[derive(Debug)]
pub struct CliqueBnb<'a, S, C> {
    /// instance
    graph: &'a Graph,
    /// relaxation solver
    solver: S,
    /// checked before each node
    stopping: C,
    /// best clique size found so far
    incumbent: Incumbent,
    /// counters
    stats: SearchStatistics,
}

impl<'a, S:LpSolver, C:StoppingCriterion> CliqueBnb<'a, S, C> {

    /** creates a search (incumbent = 0) */
    pub fn new(graph:&'a Graph, solver:S, stopping:C) -> Self {
        Self {
            graph,
            solver,
            stopping,
            incumbent: Incumbent::new(),
            stats: SearchStatistics::default(),
        }
    }

    /** explores the tree rooted at `root`. Returns the best clique found, or
    DeadlineReached if the stopping criterion interrupted the search. */
    pub fn run(&mut self, root:RelaxationProblem) -> Result<Option<CliqueCandidate>, DeadlineReached> {
        let t_start = Instant::now();
        let res = self.explore(root, 0);
        self.stats.time_searched = t_start.elapsed().as_secs_f32();
        self.stats.primal_list = self.incumbent.primal_list().to_vec();
        res
    }

    /// incumbent of the search
    pub fn incumbent(&self) -> &Incumbent { &self.incumbent }

    /// counters of the search
    pub fn statistics(&self) -> &SearchStatistics { &self.stats }

    /// consumes the search, returns its counters
    pub fn into_statistics(self) -> SearchStatistics { self.stats }

    fn explore(&mut self, problem:RelaxationProblem, depth:usize) -> Result<Option<CliqueCandidate>, DeadlineReached> {
        if self.stopping.is_finished() {
            return Err(DeadlineReached);
        }
        self.stats.nb_nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        // 1. solve
        let values = match self.solver.solve(&problem) {
            Ok(values) => problem.clean_solution(values),
            Err(LpError::Infeasible) => {
                self.stats.nb_infeasible += 1;
                trace!("depth {}: infeasible", depth);
                return Ok(None);
            },
            Err(e) => {
                self.stats.nb_solver_errors += 1;
                debug!("depth {}: solver error ({}), node dropped", depth, e);
                return Ok(None);
            }
        };
        // 2. bound
        let bound = problem.objective_value(&values);
        if !self.incumbent.can_be_improved_by(bound) {
            self.stats.nb_pruned += 1;
            trace!("depth {}: pruned (bound {:.3} ≤ {})", depth, bound, self.incumbent.best());
            return Ok(None);
        }
        // 3. integrality
        match branching_variable(&values) {
            None => {
                self.stats.nb_integral += 1;
                let candidate = CliqueCandidate { size: bound.round() as usize, values };
                debug_assert!(self.graph.is_clique(&candidate.vertices()), "invalid clique!");
                if self.incumbent.improve(candidate.size) {
                    debug!("depth {}: new best clique of size {}", depth, candidate.size);
                    Ok(Some(candidate))
                } else {
                    Ok(None)
                }
            },
            Some(var) => {
                // 4. branch (x_var = 1 first, then x_var = 0)
                trace!("depth {}: branching on x_{} = {:.3}", depth, var, values[var]);
                let one = self.explore(problem.branch(var, Fixing::One), depth+1)?;
                let zero = self.explore(problem.branch(var, Fixing::Zero), depth+1)?;
                // 5. keep the first one on ties
                Ok(match (one, zero) {
                    (Some(a), Some(b)) if b.size > a.size => Some(b),
                    (Some(a), _) => Some(a),
                    (None, b) => b,
                })
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use crate::search::coloring::{color_classes, ColoringStrategy};
    use crate::search::lp::GoodLpSolver;
    use crate::search::stopping::NeverStoppingCriterion;

    fn root(graph:&Graph) -> RelaxationProblem {
        let classes = color_classes(graph, &ColoringStrategy::DEFAULT, 0);
        RelaxationProblem::new(graph, &classes)
    }

    /// records every problem it receives, answers from a script
    struct ScriptedSolver {
        answers: Vec<Result<Vec<f64>, LpError>>,
        received: Vec<RelaxationProblem>,
    }

    impl LpSolver for ScriptedSolver {
        fn solve(&mut self, problem:&RelaxationProblem) -> Result<Vec<f64>, LpError> {
            self.received.push(problem.clone());
            if self.answers.is_empty() { Err(LpError::Infeasible) } else { self.answers.remove(0) }
        }
    }

    /// x = 1/2 everywhere
    struct HalfSolver;

    impl LpSolver for HalfSolver {
        fn solve(&mut self, problem:&RelaxationProblem) -> Result<Vec<f64>, LpError> {
            Ok(vec![0.5 ; problem.nb_variables()])
        }
    }

    /// finishes after a fixed number of checks
    struct CountdownCriterion { remaining: Cell<usize> }

    impl StoppingCriterion for CountdownCriterion {
        fn is_finished(&self) -> bool {
            let r = self.remaining.get();
            if r == 0 { return true; }
            self.remaining.set(r-1);
            false
        }
    }

    #[test]
    fn test_branching_variable() {
        assert_eq!(branching_variable(&[0., 1., 0.5, 0.3]), Some(2));
        assert_eq!(branching_variable(&[0., 1., 1.]), None);
        assert_eq!(branching_variable(&[0.9999999, 1.]), Some(0));
        assert_eq!(branching_variable(&[]), None);
    }

    #[test]
    fn test_candidate_vertices() {
        let c = CliqueCandidate { size: 2, values: vec![0., 1., 0., 1.] };
        assert_eq!(c.vertices(), vec![1, 3]);
    }

    #[test]
    fn test_cycle5() {
        let g = Graph::from_file("insts/cycle5.col").unwrap();
        let mut bnb = CliqueBnb::new(&g, GoodLpSolver, NeverStoppingCriterion);
        let best = bnb.run(root(&g)).unwrap().unwrap();
        assert_eq!(best.size, 2);
        assert_eq!(best.vertices().len(), 2);
        assert!(g.is_clique(&best.vertices()));
        assert_eq!(bnb.incumbent().best(), 2);
    }

    #[test]
    fn test_branch_on_first_fractional_one_side_first() {
        // path 0-1-2 (no color rows): root answer is fractional on x_1
        let g = Graph::from_edges(3, &[(0,1), (1,2)]);
        let mut solver = ScriptedSolver {
            answers: vec![
                Ok(vec![1., 0.5, 1.]),  // root, bound 2.5
                Ok(vec![1., 1., 0.]),   // x_1 = 1
                Ok(vec![1., 0., 0.]),   // x_1 = 0, bound 1 ≤ 2: pruned
            ],
            received: Vec::new(),
        };
        let problem = RelaxationProblem::new(&g, &[]);
        let best = {
            let mut bnb = CliqueBnb::new(&g, &mut solver, NeverStoppingCriterion);
            let best = bnb.run(problem).unwrap().unwrap();
            assert_eq!(bnb.statistics().nb_pruned, 1);
            assert_eq!(bnb.statistics().nb_integral, 1);
            best
        };
        assert_eq!(best.size, 2);
        assert_eq!(best.vertices(), vec![0, 1]);
        assert_eq!(solver.received.len(), 3);
        let first = &solver.received[1].branchings()[0];
        let second = &solver.received[2].branchings()[0];
        assert_eq!((first.variable, first.fixing), (1, Fixing::One));
        assert_eq!((second.variable, second.fixing), (1, Fixing::Zero));
        // siblings do not see each other's fixings
        assert_eq!(solver.received[2].branchings().len(), 1);
    }

    #[test]
    fn test_solver_errors_are_dead_branches() {
        let g = Graph::from_edges(3, &[(0,1), (1,2)]);
        let mut solver = ScriptedSolver {
            answers: vec![
                Ok(vec![1., 0.5, 1.]),
                Err(LpError::Solver("numerical trouble".to_string())),
                Ok(vec![0., 0., 1.]),
            ],
            received: Vec::new(),
        };
        let mut bnb = CliqueBnb::new(&g, &mut solver, NeverStoppingCriterion);
        let best = bnb.run(RelaxationProblem::new(&g, &[])).unwrap().unwrap();
        assert_eq!(best.size, 1);
        assert_eq!(best.vertices(), vec![2]);
        assert_eq!(bnb.statistics().nb_solver_errors, 1);
    }

    #[test]
    fn test_infeasible_root() {
        let g = Graph::from_edges(2, &[(0,1)]);
        let mut solver = ScriptedSolver { answers: vec![Err(LpError::Infeasible)], received: Vec::new() };
        let mut bnb = CliqueBnb::new(&g, &mut solver, NeverStoppingCriterion);
        assert_eq!(bnb.run(RelaxationProblem::new(&g, &[])), Ok(None));
        assert_eq!(bnb.statistics().nb_infeasible, 1);
    }

    #[test]
    fn test_deadline_interrupts_the_search() {
        let g = Graph::from_edges(30, &[]);
        let stopping = CountdownCriterion { remaining: Cell::new(3) };
        let mut bnb = CliqueBnb::new(&g, HalfSolver, stopping);
        assert_eq!(bnb.run(RelaxationProblem::new(&g, &[])), Err(DeadlineReached));
        assert_eq!(bnb.statistics().nb_nodes, 3);
        // no integral node was reached: nothing was written
        assert_eq!(bnb.incumbent().best(), 0);
    }

    #[test]
    fn test_incumbent_never_decreases() {
        for seed in 0..5 {
            let g = Graph::random(14, 0.6, seed);
            let mut bnb = CliqueBnb::new(&g, GoodLpSolver, NeverStoppingCriterion);
            let best = bnb.run(root(&g)).unwrap().unwrap();
            let primal_list = bnb.statistics().primal_list.clone();
            assert!(primal_list.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(primal_list.last(), Some(&best.size));
        }
    }
}
