use super::snapshot::PathSnapshot;
use crate::graphs::{edge::WeightedEdge, Graph, Metric, VertexId, Weight, INFINITY};

/// Search state of a single vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexLabel {
    pub cost: Weight,
    pub time: Weight,
    pub predecessor: Option<VertexId>,
}

impl VertexLabel {
    fn unreached() -> VertexLabel {
        VertexLabel {
            cost: INFINITY,
            time: INFINITY,
            predecessor: None,
        }
    }

    fn source() -> VertexLabel {
        VertexLabel {
            cost: 0,
            time: 0,
            predecessor: None,
        }
    }

    pub fn value(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Cost => self.cost,
            Metric::Time => self.time,
        }
    }
}

/// Scratch data of one ranked search: a label per vertex and the work queue.
/// Every search owns a fresh instance, so the graph itself stays immutable
/// and queries never see each other's state.
pub struct SearchState {
    labels: Vec<VertexLabel>,
    queue: Vec<VertexId>,
    queued: Vec<bool>,
}

impl SearchState {
    /// Labels `source` with zero and every other vertex as unreached, and
    /// queues all vertices.
    pub fn new(graph: &Graph, source: Option<VertexId>) -> SearchState {
        let number_of_vertices = graph.number_of_vertices() as usize;

        let mut labels = vec![VertexLabel::unreached(); number_of_vertices];
        if let Some(source) = source {
            labels[source as usize] = VertexLabel::source();
        }

        SearchState {
            labels,
            queue: (0..graph.number_of_vertices()).collect(),
            queued: vec![true; number_of_vertices],
        }
    }

    pub fn label(&self, vertex: VertexId) -> &VertexLabel {
        &self.labels[vertex as usize]
    }

    pub fn value(&self, vertex: VertexId, metric: Metric) -> Weight {
        self.labels[vertex as usize].value(metric)
    }

    pub fn is_queued(&self, vertex: VertexId) -> bool {
        self.queued[vertex as usize]
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Sorts the queue by the current value under `metric` and removes its
    /// front. Equal values keep their relative order.
    pub fn pop_min(&mut self, metric: Metric) -> Option<VertexId> {
        if self.queue.is_empty() {
            return None;
        }

        let labels = &self.labels;
        self.queue
            .sort_by_key(|&vertex| labels[vertex as usize].value(metric));

        let vertex = self.queue.remove(0);
        self.queued[vertex as usize] = false;
        Some(vertex)
    }

    pub fn push_back(&mut self, vertex: VertexId) {
        self.queue.push(vertex);
        self.queued[vertex as usize] = true;
    }

    /// Moves the front of the queue to its back.
    pub fn rotate(&mut self) {
        if !self.queue.is_empty() {
            self.queue.rotate_left(1);
        }
    }

    /// Extends the path of `edge.tail` by `edge`, updating cost and time of
    /// `edge.head` together.
    pub fn relax(&mut self, edge: &WeightedEdge) {
        let tail = &self.labels[edge.tail as usize];
        let (cost, time) = (
            tail.cost.saturating_add(edge.cost),
            tail.time.saturating_add(edge.time),
        );

        let head = &mut self.labels[edge.head as usize];
        head.cost = cost;
        head.time = time;
        head.predecessor = Some(edge.tail);
    }

    /// Vertices from the root of the predecessor chain to `vertex`.
    pub fn chain(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut vertices = vec![vertex];
        let mut current = vertex;
        while let Some(predecessor) = self.labels[current as usize].predecessor {
            // Predecessor links only point to vertices that left the queue
            // earlier, the bound is never hit.
            if vertices.len() > self.labels.len() {
                break;
            }
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();
        vertices
    }

    /// Freezes the current path to `vertex`.
    pub fn snapshot(&self, vertex: VertexId) -> PathSnapshot {
        let label = self.label(vertex);
        PathSnapshot {
            vertices: self.chain(vertex),
            cost: label.cost,
            time: label.time,
        }
    }

    /// Freezes the path to `edge.tail` extended by `edge`, without touching
    /// the label of `edge.head`.
    pub fn snapshot_through(&self, edge: &WeightedEdge) -> PathSnapshot {
        let tail = self.label(edge.tail);
        let mut vertices = self.chain(edge.tail);
        vertices.push(edge.head);
        PathSnapshot {
            vertices,
            cost: tail.cost.saturating_add(edge.cost),
            time: tail.time.saturating_add(edge.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::edge::EdgeRecord;

    fn line_graph() -> Graph {
        Graph::from_records(&[
            EdgeRecord::new("A", "B", 2, 5),
            EdgeRecord::new("B", "C", 3, 1),
        ])
    }

    #[test]
    fn reset_labels_source_only() {
        let graph = line_graph();
        let state = SearchState::new(&graph, graph.vertex_id("B"));

        assert_eq!(state.value(1, Metric::Cost), 0);
        assert_eq!(state.value(0, Metric::Time), INFINITY);
        assert!((0..3).all(|vertex| state.is_queued(vertex)));
    }

    #[test]
    fn relax_updates_both_fields_and_chain() {
        let graph = line_graph();
        let mut state = SearchState::new(&graph, graph.vertex_id("A"));

        for edge in graph.edges() {
            state.relax(edge);
        }

        assert_eq!(state.label(2).cost, 5);
        assert_eq!(state.label(2).time, 6);
        assert_eq!(state.chain(2), vec![0, 1, 2]);
    }

    #[test]
    fn pop_min_follows_metric() {
        let graph = Graph::from_records(&[
            EdgeRecord::new("S", "X", 1, 9),
            EdgeRecord::new("S", "Y", 9, 1),
        ]);
        let mut state = SearchState::new(&graph, graph.vertex_id("S"));
        assert_eq!(state.pop_min(Metric::Cost), Some(0));
        for edge in graph.edges() {
            state.relax(edge);
        }

        let mut by_time = SearchState::new(&graph, None);
        by_time.labels = state.labels.clone();
        by_time.queue.retain(|&vertex| vertex != 0);

        assert_eq!(state.pop_min(Metric::Cost), graph.vertex_id("X"));
        assert_eq!(by_time.pop_min(Metric::Time), graph.vertex_id("Y"));
    }
}
