use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Graph, Metric, VertexId, Weight, INFINITY};

/// Classical single pair Dijkstra under `metric`, used as a reference for
/// the best ranked value. Returns `None` if `target` is unreachable or
/// either name is unknown. Assumes non-negative weights.
pub fn shortest_path_value(
    graph: &Graph,
    source: &str,
    target: &str,
    metric: Metric,
) -> Option<Weight> {
    let source = graph.vertex_id(source)?;
    let target = graph.vertex_id(target)?;

    let mut distances = vec![INFINITY; graph.number_of_vertices() as usize];
    let mut expanded = vec![false; graph.number_of_vertices() as usize];
    // Min-heap on (distance, vertex).
    let mut queue: BinaryHeap<Reverse<(Weight, VertexId)>> = BinaryHeap::new();

    distances[source as usize] = 0;
    queue.push(Reverse((0, source)));

    while let Some(Reverse((weight, vertex))) = queue.pop() {
        if expanded[vertex as usize] {
            continue;
        }
        expanded[vertex as usize] = true;

        if vertex == target {
            return Some(weight);
        }

        for edge in graph.out_edges(vertex) {
            let alternative_distance = weight.saturating_add(edge.weight(metric));
            if alternative_distance < distances[edge.head as usize] {
                distances[edge.head as usize] = alternative_distance;
                queue.push(Reverse((alternative_distance, edge.head)));
            }
        }
    }

    None
}
