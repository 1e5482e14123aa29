use std::fs;

use clap::ArgMatches;
use log::info;
use serde_json::json;

use crate::{
    error::CliqueError,
    graph::Graph,
    search::coloring::ColoringStrategy,
    solver::{SearchConfig, SearchOutcome, SearchReport},
};

/** command line parameters of a run */
#[derive(Debug, Clone)]
pub struct Params {
    /// instance file
    pub inst_filename: String,
    /// search parameters
    pub config: SearchConfig,
    /// file where the clique is written
    pub sol_file: Option<String>,
    /// file where the statistics are written
    pub perf_file: Option<String>,
}

/** reads command line input and returns the instance name, search configuration,
solution_filename and stats_filename */
pub fn read_params(main_args:&ArgMatches) -> Result<Params, CliqueError> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default().to_string();
    let mut config = SearchConfig::default();
    if let Some(t) = main_args.value_of("time") {
        let t:f32 = t.parse().map_err(|_| CliqueError::InvalidArgument {
            arg: "time", value: t.to_string()
        })?;
        // 0 means "no time limit"
        config.time_limit = if t > 0. { Some(t) } else { None };
    }
    if let Some(seed) = main_args.value_of("seed") {
        config.seed = seed.parse().map_err(|_| CliqueError::InvalidArgument {
            arg: "seed", value: seed.to_string()
        })?;
    }
    if let Some(strategies) = main_args.value_of("strategies") {
        config.strategies = parse_strategies(strategies)?;
    }
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    Ok(Params { inst_filename, config, sol_file, perf_file })
}

/// reads a comma separated list of coloring strategies ("all" selects every strategy)
pub fn parse_strategies(s:&str) -> Result<Vec<ColoringStrategy>, CliqueError> {
    match s.trim() {
        "all" => Ok(ColoringStrategy::ALL.to_vec()),
        "" | "none" => Ok(Vec::new()),
        list => list.split(',').map(|e| e.parse()).collect(),
    }
}

/// exports search results to files
pub fn export_results(
    graph:&Graph,
    params:&Params,
    report:&SearchReport,
) -> Result<(), CliqueError> {
    // export statistics
    if let Some(filename) = &params.perf_file {
        let stats = json!({
            "inst_name": params.inst_filename,
            "config": params.config,
            "report": report,
        });
        write_file(filename, serde_json::to_string(&stats)?)?;
    }
    // export solution
    if let (Some(filename), SearchOutcome::Optimal(clique)) = (&params.sol_file, &report.outcome) {
        write_file(filename, graph.solution_to_string(&clique.vertices))?;
    }
    Ok(())
}

/// writes a file
fn write_file(filename:&str, content:String) -> Result<(), CliqueError> {
    fs::write(filename, content).map_err(|source| CliqueError::Io {
        path: filename.to_string(),
        source,
    })
}
