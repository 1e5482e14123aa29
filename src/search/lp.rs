use good_lp::{default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};
use thiserror::Error;

use super::relaxation::RelaxationProblem;

/** reasons why a relaxation has no optimal solution */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LpError {
    /// no point satisfies the constraints
    #[error("infeasible")]
    Infeasible,
    /// the objective is not bounded
    #[error("unbounded")]
    Unbounded,
    /// the solver failed (numerical issue, ...)
    #[error("solver failure: {0}")]
    Solver(String),
}

impl From<ResolutionError> for LpError {
    fn from(e: ResolutionError) -> Self {
        match e {
            ResolutionError::Infeasible => LpError::Infeasible,
            ResolutionError::Unbounded => LpError::Unbounded,
            other => LpError::Solver(other.to_string()),
        }
    }
}

/** solves linear programs with bounded continuous variables and "≤" rows */
pub trait LpSolver {
    /** returns the value of each variable in an optimal solution */
    fn solve(&mut self, problem:&RelaxationProblem) -> Result<Vec<f64>, LpError>;
}

impl<S: LpSolver + ?Sized> LpSolver for &mut S {
    fn solve(&mut self, problem:&RelaxationProblem) -> Result<Vec<f64>, LpError> {
        (**self).solve(problem)
    }
}

/** LP solver backed by good_lp (default solver of the build) */
#[derive(Debug, Default, Clone, Copy)]
pub struct GoodLpSolver;

impl LpSolver for GoodLpSolver {
    fn solve(&mut self, problem:&RelaxationProblem) -> Result<Vec<f64>, LpError> {
        let mut model = ProblemVariables::new();
        // x_v ∈ [lower, upper]
        let x:Vec<Variable> = problem.variables().iter()
            .map(|v| model.add(variable().min(v.lower).max(v.upper)))
            .collect();
        let mut obj_expr = Expression::with_capacity(x.len());
        for (xv,v) in x.iter().zip(problem.variables()) {
            obj_expr.add_mul(v.objective, *xv);
        }
        let mut lp = model.maximise(obj_expr).using(default_solver);
        for c in problem.constraints() {
            let mut cst = Expression::with_capacity(c.terms.len());
            for (var,coef) in &c.terms { cst.add_mul(*coef, x[*var]); }
            lp.add_constraint(cst.leq(c.rhs));
        }
        let sol = lp.solve()?;
        Ok(x.iter().map(|xv| sol.value(*xv)).collect())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::Graph;
    use crate::search::relaxation::Fixing;

    #[test]
    fn test_two_non_adjacent_vertices() {
        let g = Graph::from_edges(2, &[]);
        let problem = RelaxationProblem::new(&g, &[]);
        let values = GoodLpSolver.solve(&problem).unwrap();
        assert_eq!(values.len(), 2);
        assert!((problem.objective_value(&values) - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_complete_graph_is_integral() {
        let g = Graph::from_file("insts/complete4.col").unwrap();
        let problem = RelaxationProblem::new(&g, &[]);
        let values = GoodLpSolver.solve(&problem).unwrap();
        for v in values { assert!((v - 1.).abs() < 1e-6); }
    }

    #[test]
    fn test_cycle5_relaxation_is_fractional() {
        // without color rows: x = 1/2 everywhere, objective 5/2
        let g = Graph::from_file("insts/cycle5.col").unwrap();
        let problem = RelaxationProblem::new(&g, &[]);
        let values = GoodLpSolver.solve(&problem).unwrap();
        assert!((problem.objective_value(&values) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_fixing_non_adjacent_vertices_is_infeasible() {
        let g = Graph::from_file("insts/cycle5.col").unwrap();
        let problem = RelaxationProblem::new(&g, &[])
            .branch(0, Fixing::One)
            .branch(2, Fixing::One);
        assert_eq!(GoodLpSolver.solve(&problem), Err(LpError::Infeasible));
    }

    #[test]
    fn test_fixings_are_respected() {
        let g = Graph::from_file("insts/complete4.col").unwrap();
        let problem = RelaxationProblem::new(&g, &[]).branch(1, Fixing::Zero);
        let values = problem.clean_solution(GoodLpSolver.solve(&problem).unwrap());
        assert_eq!(values[1], 0.);
        assert!((problem.objective_value(&values) - 3.).abs() < 1e-6);
    }
}
