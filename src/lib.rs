//! Maximum clique solver: branch & bound on an LP relaxation strengthened by colorings

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// errors (instance reading, command line)
pub mod error;

/// undirected graph
pub mod graph;

/// read DIMACS formats
pub mod dimacs;

/// search components (colorings, relaxation, branch & bound)
pub mod search;

/// maximum clique search entry point
pub mod solver;

/// helper and utility methods for executables
pub mod util;
