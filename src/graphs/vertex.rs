use serde::{Deserialize, Serialize};

use super::VertexId;

/// A named vertex. Names are unique within a graph and compared exactly
/// (case-sensitive).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    // Heads of all out edges in declaration order. A twice declared edge shows
    // up twice.
    adjacency: Vec<VertexId>,
}

impl Vertex {
    pub fn new(name: &str) -> Vertex {
        Vertex {
            name: name.to_string(),
            adjacency: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn adjacency(&self) -> &[VertexId] {
        &self.adjacency
    }

    pub fn add_adjacent_vertex(&mut self, head: VertexId) {
        self.adjacency.push(head);
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}
