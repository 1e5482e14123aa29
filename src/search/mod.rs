//! Branch & bound search for the maximum clique problem.

/// colorings producing the color class rows
pub mod coloring;

/// LP relaxation of the maximum clique problem
pub mod relaxation;

/// LP solving capability
pub mod lp;

/// best clique size found so far
pub mod incumbent;

/// time limits
pub mod stopping;

/// branch & bound for the CLIQUE problem
pub mod clique_bnb;
