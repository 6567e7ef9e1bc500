use log::{debug, trace};

use super::{
    path::PathResult,
    query::ShortestPathRequest,
    search_state::SearchState,
    snapshot::{PathSnapshot, RankSlots},
};
use crate::graphs::{Graph, Metric, INFINITY};

#[derive(Debug, Default)]
struct SearchStatistics {
    iterations: u32,
    relaxations: u32,
    promotions: u32,
}

impl Graph {
    /// The three best distinct paths from `source` to `target` under
    /// `metric`. Ranks without a path are [`PathResult::NoPath`], which is
    /// also what every rank holds if one of the names is unknown.
    pub fn find_top_three_paths(
        &self,
        source: &str,
        target: &str,
        metric: Metric,
    ) -> [PathResult; 3] {
        ranked_search(self, source, target, metric).into_results(self)
    }

    pub fn find_top_three_paths_for(&self, request: &ShortestPathRequest) -> [PathResult; 3] {
        self.find_top_three_paths(&request.source, &request.target, request.metric)
    }
}

/// Modified Dijkstra search that records the first, second and third best
/// value reaching `target` in a single pass.
///
/// All vertices start in the work queue, which is fully re-sorted before
/// every pop. The target is only expanded once it is the last vertex left:
/// whenever it reaches the front earlier, the next vertex is expanded in its
/// place and the target goes to the back of the queue. This keeps the target
/// relaxable after its first optimum is known, which is where the second and
/// third values come from.
///
/// Relaxing the target with a strictly better value makes it the new rank 1
/// and pushes the previous ranks down. A value strictly between rank 1 and
/// rank 2, or between rank 2 and rank 3, takes that slot instead. Only the
/// value of a rank is compared, so this is not a k shortest paths search: a
/// path that never shows up as a relaxation candidate of the target is never
/// ranked.
pub fn ranked_search(graph: &Graph, source: &str, target: &str, metric: Metric) -> RankSlots {
    let mut ranks = RankSlots::new();

    let (Some(source), Some(target)) = (graph.vertex_id(source), graph.vertex_id(target)) else {
        debug!(
            "no path from '{}' to '{}': unknown vertex",
            source, target
        );
        return ranks;
    };

    let mut state = SearchState::new(graph, Some(source));
    if source == target {
        ranks.improve_first(
            PathSnapshot {
                vertices: vec![source],
                cost: 0,
                time: 0,
            },
            0,
        );
    }

    let mut statistics = SearchStatistics::default();
    while let Some(mut current) = state.pop_min(metric) {
        statistics.iterations += 1;

        if current == target {
            if let Some(next) = state.pop_min(metric) {
                state.push_back(target);
                current = next;
            }
        }

        let current_value = state.value(current, metric);
        if current_value == INFINITY {
            state.rotate();
            continue;
        }

        for edge in graph.out_edges(current) {
            let head = edge.head;
            if !state.is_queued(head) {
                continue;
            }

            let candidate = current_value.saturating_add(edge.weight(metric));
            if candidate < state.value(head, metric) {
                state.relax(edge);
                statistics.relaxations += 1;
                trace!(
                    "relaxed {} -> {} to {}",
                    graph.name(current),
                    graph.name(head),
                    candidate
                );

                if head == target {
                    ranks.improve_first(state.snapshot(target), candidate);
                    statistics.promotions += 1;
                }
            } else if head == target {
                // A path through the target itself would be a cycle.
                if state.chain(current).contains(&target) {
                    continue;
                }

                if let Some(rank) = ranks.offer(candidate, target, || state.snapshot_through(edge)) {
                    statistics.promotions += 1;
                    trace!(
                        "path via {} with value {} takes rank {}",
                        graph.name(current),
                        candidate,
                        rank + 1
                    );
                }
            }
        }

        state.rotate();
    }

    debug!(
        "searched '{}' -> '{}' by {}: {:?}, values {:?}",
        graph.name(source),
        graph.name(target),
        metric,
        statistics,
        (0..3).map(|rank| ranks.value(rank)).collect::<Vec<_>>()
    );

    ranks
}
