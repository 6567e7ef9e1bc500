use ahash::{HashSet, HashSetExt};

use super::{dijkstra::shortest_path_value, path::PathResult, query::ShortestPathRequest};
use crate::graphs::{Graph, Weight};

/// Checks the three results of `request` against the graph. Returns a
/// description of the first problem found.
///
/// Rank 1 has to carry the value a classical Dijkstra finds, present ranks
/// have to be strictly increasing, and every present path has to be a simple
/// path from source to target along declared edges whose first declared
/// weights add up to the reported cost and time.
pub fn validate_ranked_paths(
    graph: &Graph,
    request: &ShortestPathRequest,
    results: &[PathResult; 3],
) -> Result<(), String> {
    let expected = shortest_path_value(graph, &request.source, &request.target, request.metric);
    let first = results[0].path().map(|path| path.value(request.metric));
    if first != expected {
        return Err(format!(
            "rank 1 has value {:?}, shortest path value is {:?}",
            first, expected
        ));
    }

    let mut previous: Option<Weight> = None;
    for (rank, result) in results.iter().enumerate() {
        let Some(path) = result.path() else {
            continue;
        };

        let value = path.value(request.metric);
        if let Some(previous) = previous {
            if value <= previous {
                return Err(format!(
                    "rank {} has value {}, not above the previous rank's {}",
                    rank + 1,
                    value,
                    previous
                ));
            }
        }
        previous = Some(value);

        validate_path(graph, request, &path.vertices, path.cost, path.time)
            .map_err(|reason| format!("rank {}: {}", rank + 1, reason))?;
    }

    Ok(())
}

fn validate_path(
    graph: &Graph,
    request: &ShortestPathRequest,
    vertices: &[String],
    cost: Weight,
    time: Weight,
) -> Result<(), String> {
    // Ensure first and last vertex of path are source and target of request.
    if vertices.first() != Some(&request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if vertices.last() != Some(&request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let mut seen = HashSet::new();
    if let Some(repeated) = vertices.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(format!("vertex {} appears twice", repeated));
    }

    // check if there is an edge between consecutive path vertices.
    let (mut true_cost, mut true_time): (Weight, Weight) = (0, 0);
    for window in vertices.windows(2) {
        let edge = graph
            .vertex_id(&window[0])
            .zip(graph.vertex_id(&window[1]))
            .and_then(|(tail, head)| graph.get_edge(tail, head))
            .ok_or_else(|| format!("no edge between {} and {} found", window[0], window[1]))?;
        true_cost = true_cost.saturating_add(edge.cost);
        true_time = true_time.saturating_add(edge.time);
    }

    if (true_cost, true_time) != (cost, time) {
        return Err(format!(
            "path reports cost {} and time {}, its edges add up to {} and {}",
            cost, time, true_cost, true_time
        ));
    }

    Ok(())
}
