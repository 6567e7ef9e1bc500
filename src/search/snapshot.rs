use super::path::{PathResult, RankedPath};
use crate::graphs::{Graph, VertexId, Weight, INFINITY};

/// Value copy of a path to the destination as it was when its rank was
/// established.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSnapshot {
    /// From the source to the destination.
    pub vertices: Vec<VertexId>,
    pub cost: Weight,
    pub time: Weight,
}

impl PathSnapshot {
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn to_ranked_path(&self, graph: &Graph) -> RankedPath {
        RankedPath {
            vertices: self
                .vertices
                .iter()
                .map(|&vertex| graph.name(vertex).to_string())
                .collect(),
            cost: self.cost,
            time: self.time,
        }
    }
}

/// The three best distinct values reaching the destination, with the path
/// that established each of them. Present values are strictly increasing
/// from rank 1 to rank 3.
#[derive(Clone, Debug)]
pub struct RankSlots {
    values: [Weight; 3],
    snapshots: [Option<PathSnapshot>; 3],
}

impl Default for RankSlots {
    fn default() -> Self {
        RankSlots {
            values: [INFINITY; 3],
            snapshots: [None, None, None],
        }
    }
}

impl RankSlots {
    pub fn new() -> RankSlots {
        RankSlots::default()
    }

    pub fn value(&self, rank: usize) -> Option<Weight> {
        self.snapshots[rank].as_ref().map(|_| self.values[rank])
    }

    pub fn snapshot(&self, rank: usize) -> Option<&PathSnapshot> {
        self.snapshots[rank].as_ref()
    }

    /// Records a new best value. The previous ranks 1 and 2 move down one
    /// slot, the previous rank 3 is dropped.
    pub fn improve_first(&mut self, snapshot: PathSnapshot, value: Weight) {
        self.snapshots.rotate_right(1);
        self.values.rotate_right(1);
        self.snapshots[0] = Some(snapshot);
        self.values[0] = value;
    }

    /// Offers a path that does not improve the best value. It takes rank 2
    /// or rank 3 if its value lies strictly between the neighbouring ranks.
    /// Returns the rank taken.
    pub fn offer<F>(&mut self, value: Weight, destination: VertexId, snapshot: F) -> Option<usize>
    where
        F: FnOnce() -> PathSnapshot,
    {
        if value > self.values[0] && value < self.values[1] {
            // A rank 2 path already ending in the destination is pushed down
            // instead of being overwritten.
            if self.snapshots[1]
                .as_ref()
                .is_some_and(|previous| previous.contains(destination))
            {
                self.snapshots[2] = self.snapshots[1].take();
                self.values[2] = self.values[1];
            }
            self.snapshots[1] = Some(snapshot());
            self.values[1] = value;
            return Some(1);
        }

        if value > self.values[1] && value < self.values[2] {
            self.snapshots[2] = Some(snapshot());
            self.values[2] = value;
            return Some(2);
        }

        None
    }

    pub fn into_results(self, graph: &Graph) -> [PathResult; 3] {
        self.snapshots.map(|snapshot| match snapshot {
            Some(snapshot) => PathResult::Found(snapshot.to_ranked_path(graph)),
            None => PathResult::NoPath,
        })
    }
}
