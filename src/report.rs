//! Plain-text listings of shortest-path results.
//!
//! One line per target: `0->2(3):0 1 2` for a reachable vertex, `0->0:itself.` for the
//! source and `0->4:infinity.` when there is no path.

use std::fmt::Display;

use crate::algorithm::path::{all_pairs_route, single_source_route, Route};
use crate::algorithm::{AllPairsResult, ShortestPathResult};
use crate::graph::Weight;

fn push_line<D>(out: &mut String, from: usize, to: usize, distance: D, route: &Route)
where
    D: Display,
{
    match route {
        Route::Itself => {
            out.push_str(&format!("{}->{}:itself.\n", from, to));
        }
        Route::Unreachable => {
            out.push_str(&format!("{}->{}:infinity.\n", from, to));
        }
        Route::Through(path) => {
            let vertices: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!("{}->{}({}):{}\n", from, to, distance, vertices.join(" ")));
        }
    }
}

/// Renders the listing for every vertex, from the result's source.
pub fn single_source_report<W>(result: &ShortestPathResult<W>) -> String
where
    W: Weight + Display,
{
    let mut out = String::new();
    for (target, distance) in result.distances.iter().enumerate() {
        let route = single_source_route(result, target);
        push_line(&mut out, result.source, target, distance, &route);
    }
    out
}

/// Renders the listing for every ordered pair of vertices.
pub fn all_pairs_report<W>(result: &AllPairsResult<W>) -> String
where
    W: Weight + Display,
{
    let mut out = String::new();
    for from in 0..result.vertex_count {
        for to in 0..result.vertex_count {
            let route = all_pairs_route(result, from, to);
            push_line(&mut out, from, to, result.distance(from, to), &route);
        }
    }
    out
}
