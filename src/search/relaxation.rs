use std::rc::Rc;

use log::debug;
use serde::Serialize;

use crate::graph::{Graph, VertexId};


/** a continuous variable of the relaxation */
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// name (x_<vertex>)
    pub name: String,
    /// lower bound
    pub lower: f64,
    /// upper bound
    pub upper: f64,
    /// objective coefficient
    pub objective: f64,
}

impl Variable {
    /// true iff both bounds are equal
    pub fn is_fixed(&self) -> bool { self.lower == self.upper }
}

/** origin of a row */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConstraintKind {
    /// at most one vertex per color class
    ColorClass,
    /// two non-adjacent vertices cannot both be in the clique
    NonEdge,
}

/** linear row: ∑ coef.x_var ≤ rhs */
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// unique name (c_<k>)
    pub name: String,
    /// origin of the row
    pub kind: ConstraintKind,
    /// sparse terms (variable index, coefficient)
    pub terms: Vec<(usize,f64)>,
    /// right hand side
    pub rhs: f64,
}

/** side of a branch */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixing {
    /// x = 0 (x ≤ 0)
    Zero,
    /// x = 1 (-x ≤ -1)
    One,
}

impl Fixing {
    /// value the variable takes
    pub fn value(&self) -> f64 {
        match self {
            Fixing::Zero => 0.,
            Fixing::One => 1.,
        }
    }

    /// right hand side of the equivalent "≤" row
    pub fn rhs(&self) -> f64 {
        match self {
            Fixing::Zero => 0.,
            Fixing::One => -1.,
        }
    }
}

/** branching decision taken on the path from the root */
#[derive(Debug, Clone, PartialEq)]
pub struct Branching {
    /// unique name (branch_<var>_<rhs>)
    pub name: String,
    /// fixed variable
    pub variable: usize,
    /// side
    pub fixing: Fixing,
}


/**
LP relaxation of the maximum clique problem (always maximized):
max ∑ x_v, x_v ∈ [0,1], ∑_{v∈C} x_v ≤ 1 for each color class C, x_u + x_v ≤ 1 for each
non-edge uv.
The rows built from the graph are shared (never modified). The bounds and the branching
decisions belong to each problem: branching returns a new problem.
*/
#[derive(Debug, Clone)]
pub struct RelaxationProblem {
    /// one variable per vertex
    variables: Vec<Variable>,
    /// color class rows, then non-edge rows
    constraints: Rc<[LinearConstraint]>,
    /// fixings on the path from the root
    branchings: Vec<Branching>,
}

impl RelaxationProblem {

    /** builds the root relaxation from the graph and the color classes */
    pub fn new(graph:&Graph, color_classes:&[Vec<VertexId>]) -> Self {
        let variables:Vec<Variable> = graph.vertices().map(|v| Variable {
            name: format!("x_{}", v),
            lower: 0.,
            upper: 1.,
            objective: 1.,
        }).collect();
        let mut constraints = Vec::with_capacity(color_classes.len());
        // ∑_{v∈C} x_v ≤ 1      ∀ C color class
        for class in color_classes {
            constraints.push(LinearConstraint {
                name: format!("c_{}", constraints.len()),
                kind: ConstraintKind::ColorClass,
                terms: class.iter().map(|v| (*v, 1.)).collect(),
                rhs: 1.,
            });
        }
        // x_u + x_v ≤ 1      ∀ uv ∉ E
        for (u,v) in graph.complement_edges() {
            constraints.push(LinearConstraint {
                name: format!("c_{}", constraints.len()),
                kind: ConstraintKind::NonEdge,
                terms: vec![(u, 1.), (v, 1.)],
                rhs: 1.,
            });
        }
        debug!(
            "relaxation: {} variables, {} color rows, {} non-edge rows",
            variables.len(), color_classes.len(), constraints.len() - color_classes.len()
        );
        Self {
            variables,
            constraints: constraints.into(),
            branchings: Vec::new(),
        }
    }

    /// variables (one per vertex, same index)
    pub fn variables(&self) -> &[Variable] { &self.variables }

    /// rows built from the graph
    pub fn constraints(&self) -> &[LinearConstraint] { &self.constraints }

    /// fixings applied on the path from the root
    pub fn branchings(&self) -> &[Branching] { &self.branchings }

    /// number of variables
    pub fn nb_variables(&self) -> usize { self.variables.len() }

    /** returns a copy of the problem in which `var` is fixed. The current problem is not
    modified. */
    pub fn branch(&self, var:usize, fixing:Fixing) -> Self {
        let mut res = self.clone();
        res.fix(var, fixing);
        res
    }

    /// tightens the bounds of var
    fn fix(&mut self, var:usize, fixing:Fixing) {
        let variable = &mut self.variables[var];
        match fixing {
            Fixing::Zero => variable.upper = 0.,
            Fixing::One => variable.lower = 1.,
        }
        self.branchings.push(Branching {
            name: format!("branch_{}_{}", var, fixing.rhs()),
            variable: var,
            fixing,
        });
    }

    /** reads a solution vector: fixed variables take their bound value (solvers may
    report them with a rounding noise) */
    pub fn clean_solution(&self, mut values:Vec<f64>) -> Vec<f64> {
        for (value,variable) in values.iter_mut().zip(self.variables.iter()) {
            if variable.is_fixed() { *value = variable.lower; }
        }
        values
    }

    /// objective value of a solution vector
    pub fn objective_value(&self, values:&[f64]) -> f64 {
        values.iter().zip(self.variables.iter()).map(|(x,v)| x*v.objective).sum()
    }
}
