use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;

use self::{path::PathResult, query::ShortestPathRequest};
use crate::graphs::Graph;

pub mod dijkstra;
pub mod path;
pub mod query;
pub mod ranked_paths;
pub mod search_state;
pub mod snapshot;
pub mod validation;

/// Answers every request independently and in parallel. Results keep the
/// order of `requests`.
pub fn run_requests(graph: &Graph, requests: &[ShortestPathRequest]) -> Vec<[PathResult; 3]> {
    requests
        .par_iter()
        .map(|request| graph.find_top_three_paths_for(request))
        .collect()
}

pub fn run_requests_with_progress(
    graph: &Graph,
    requests: &[ShortestPathRequest],
    bar: ProgressBar,
) -> Vec<[PathResult; 3]> {
    requests
        .par_iter()
        .progress_with(bar)
        .map(|request| graph.find_top_three_paths_for(request))
        .collect()
}
