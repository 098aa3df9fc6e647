use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use log::{debug, error};
use serde::Serialize;

use shortest_paths::config::{Mode, OutputFormat, RunConfig};
use shortest_paths::graph::{parse_edge_list, EdgeList};
use shortest_paths::report::{all_pairs_report, single_source_report};
use shortest_paths::{
    all_pairs_route, cross_check, shortest_paths_all_pairs, shortest_paths_single_source,
    AllPairsResult, Error, Result, Route, ShortestPathResult,
};

#[derive(Serialize)]
struct SingleSourceOutput<'a> {
    algorithm: &'static str,
    #[serde(flatten)]
    result: &'a ShortestPathResult<i64>,
    routes: Vec<Route>,
}

#[derive(Serialize)]
struct AllPairsOutput<'a> {
    algorithm: &'static str,
    #[serde(flatten)]
    result: &'a AllPairsResult<i64>,
    routes: Vec<Vec<Route>>,
}

fn read_input(config: &RunConfig) -> Result<EdgeList<i64>> {
    if config.prompts {
        eprintln!("Number of vertices, then directed edges as `from to weight` ending with `0 0 0`,");
        eprintln!("then the source vertex:");
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    parse_edge_list(&input)
}

fn run_single_source(edges: &EdgeList<i64>, source: usize, format: OutputFormat) -> Result<()> {
    let graph = edges.to_directed_graph()?;
    let result = shortest_paths_single_source(&graph, source)?;
    match format {
        OutputFormat::Text => print!("{}", single_source_report(&result)),
        OutputFormat::Json => {
            let routes = (0..result.distances.len())
                .map(|target| shortest_paths::single_source_route(&result, target))
                .collect();
            let output = SingleSourceOutput {
                algorithm: "dijkstra",
                result: &result,
                routes,
            };
            println!("{}", to_json(&output)?);
        }
    }
    Ok(())
}

fn run_all_pairs(edges: &EdgeList<i64>, format: OutputFormat) -> Result<()> {
    let matrix = edges.to_matrix()?;
    let result = shortest_paths_all_pairs(&matrix)?;
    match format {
        OutputFormat::Text => print!("{}", all_pairs_report(&result)),
        OutputFormat::Json => {
            let n = result.vertex_count;
            let routes = (0..n)
                .map(|from| (0..n).map(|to| all_pairs_route(&result, from, to)).collect())
                .collect();
            let output = AllPairsOutput {
                algorithm: "floyd-warshall",
                result: &result,
                routes,
            };
            println!("{}", to_json(&output)?);
        }
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Config(format!("cannot encode output: {}", e)))
}

fn run(config: &RunConfig) -> Result<()> {
    let edges = read_input(config)?;
    let source = edges.source.unwrap_or(config.default_source);
    if source >= edges.vertex_count {
        return Err(Error::InvalidVertex(source));
    }
    debug!("running {} on {} vertices from source {}", config.mode, edges.vertex_count, source);

    match config.mode {
        Mode::Dijkstra => run_single_source(&edges, source, config.format),
        Mode::FloydWarshall => run_all_pairs(&edges, config.format),
        Mode::CrossCheck => {
            let graph = edges.to_directed_graph()?;
            let mismatches = cross_check(&graph, source)?;
            if mismatches.is_empty() {
                println!("Dijkstra and Floyd-Warshall agree on all {} vertices.", edges.vertex_count);
                Ok(())
            } else {
                Err(Error::Config(format!("engines disagree on vertices {:?}", mismatches)))
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match RunConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: shortest_path [dijkstra|floyd-warshall|cross-check] [--json] [--quiet] [--source N]");
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::NegativeEdge { .. }) => {
            println!("There is a negative-weight edge.");
            ExitCode::FAILURE
        }
        Err(Error::NegativeCycle { .. }) => {
            println!("There is a negative-weight cycle.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
