//! Maximum clique solver: branch & bound on an LP relaxation strengthened by colorings


// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

use std::process;

use clap::{App, load_yaml};
use log::{error, info};

use clique_lp::error::CliqueError;
use clique_lp::graph::Graph;
use clique_lp::solver::{find_max_clique, SearchOutcome};
use clique_lp::util::{read_params, export_results};


/**
reads an instance, takes the time limit as a parameter, and solves the problem.
*/
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CliqueError> {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    info!("reading instance: {}...", params.inst_filename);
    let graph = Graph::from_file(&params.inst_filename)?;
    graph.display_statistics();
    match params.config.time_limit {
        Some(t) => info!("time limit: {}", t),
        None => info!("no time limit"),
    }
    // solve it
    let report = find_max_clique(&graph, &params.config);
    match &report.outcome {
        SearchOutcome::Optimal(clique) => {
            println!("Maximum clique size: {}", clique.size);
            let labels:Vec<usize> = clique.vertices.iter().map(|v| graph.label(*v)).collect();
            println!("Nodes: {:?}", labels);
        },
        SearchOutcome::TimedOut => println!("Timed out!"),
        SearchOutcome::NotFound => println!("No clique found (every relaxation failed)"),
    }
    println!("search took {:.3} seconds ({} nodes)", report.time_total, report.statistics.nb_nodes);
    // export results
    export_results(&graph, &params, &report)
}
