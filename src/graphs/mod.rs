use std::{fmt, str::FromStr};

use ahash::HashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use self::{
    edge::{DirectedEdge, EdgeRecord, WeightedEdge},
    vertex::Vertex,
};
use crate::error::{GraphError, Result};

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod vertex;

pub type VertexId = u32;
pub type EdgeId = u32;
pub type Weight = i64;

/// Value of a vertex not reached (yet) by a search.
pub const INFINITY: Weight = Weight::MAX;

/// The cumulative field a search compares and ranks by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Cost,
    Time,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Cost => write!(f, "COST"),
            Metric::Time => write!(f, "TIME"),
        }
    }
}

impl FromStr for Metric {
    type Err = GraphError;

    /// Accepts the selectors of a search file, `C`/`COST` and `T`/`TIME`,
    /// regardless of case.
    fn from_str(selector: &str) -> Result<Metric> {
        match selector.trim().to_ascii_uppercase().as_str() {
            "C" | "COST" => Ok(Metric::Cost),
            "T" | "TIME" => Ok(Metric::Time),
            other => Err(GraphError::malformed(
                0,
                format!("unknown metric selector '{}'", other),
            )),
        }
    }
}

/// Directed graph of named vertices. Edges are identified by their ordered
/// endpoint pair: if the same pair is declared more than once, every
/// declaration is stored and shows up in the adjacency of its tail, but only
/// the first declared weights are ever used.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<WeightedEdge>,
    vertex_ids: HashMap<String, VertexId>,
    first_edges: HashMap<DirectedEdge, EdgeId>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn from_records(records: &[EdgeRecord]) -> Graph {
        let mut graph = Graph::new();
        records.iter().for_each(|record| {
            graph.add_edge(record);
        });
        graph
    }

    /// Builds a graph from records that still have to be validated. The first
    /// malformed record aborts the construction.
    pub fn try_from_fields<I, R, S>(records: I) -> Result<Graph>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (index, fields) in records.into_iter().enumerate() {
            let record =
                EdgeRecord::from_fields(fields.as_ref()).map_err(|error| error.at_line(index + 1))?;
            graph.add_edge(&record);
        }
        Ok(graph)
    }

    /// Adds the edge of `record`, creating its endpoints if needed, and
    /// returns the id of the new edge.
    pub fn add_edge(&mut self, record: &EdgeRecord) -> EdgeId {
        if record.cost < 0 || record.time < 0 {
            warn!(
                "edge {} -> {} has a negative weight (cost {}, time {})",
                record.from, record.to, record.cost, record.time
            );
        }

        let tail = self.get_or_insert_vertex(&record.from);
        let head = self.get_or_insert_vertex(&record.to);

        let edge_id = self.edges.len() as EdgeId;
        let edge = WeightedEdge {
            tail,
            head,
            cost: record.cost,
            time: record.time,
        };

        if let Some(&first) = self.first_edges.get(&edge.unweighted()) {
            warn!(
                "edge {} -> {} declared again, weights of edge #{} are used",
                record.from, record.to, first
            );
        } else {
            self.first_edges.insert(edge.unweighted(), edge_id);
        }

        self.edges.push(edge);
        self.vertices[tail as usize].add_adjacent_vertex(head);

        edge_id
    }

    fn get_or_insert_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&vertex) = self.vertex_ids.get(name) {
            return vertex;
        }

        let vertex = self.vertices.len() as VertexId;
        self.vertices.push(Vertex::new(name));
        self.vertex_ids.insert(name.to_string(), vertex);
        vertex
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertex_ids.get(name).copied()
    }

    pub fn vertex(&self, vertex: VertexId) -> &Vertex {
        &self.vertices[vertex as usize]
    }

    pub fn name(&self, vertex: VertexId) -> &str {
        self.vertices[vertex as usize].name()
    }

    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.iter()
    }

    /// All edges as declared, shadowed duplicates included.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// The first declared edge from `tail` to `head`, if any.
    pub fn get_edge(&self, tail: VertexId, head: VertexId) -> Option<&WeightedEdge> {
        let edge_id = self.first_edges.get(&DirectedEdge::new(tail, head))?;
        Some(&self.edges[*edge_id as usize])
    }

    /// Out edges of `tail` in adjacency order, each resolved to the first
    /// declared edge of its endpoint pair.
    pub fn out_edges(&self, tail: VertexId) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.vertices[tail as usize]
            .adjacency()
            .iter()
            .filter_map(move |&head| self.get_edge(tail, head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_unique_by_exact_name() {
        let graph = Graph::from_records(&[
            EdgeRecord::new("A", "B", 1, 1),
            EdgeRecord::new("B", "a", 1, 1),
            EdgeRecord::new("a", "A", 1, 1),
        ]);

        assert_eq!(graph.number_of_vertices(), 3);
        assert_ne!(graph.vertex_id("A"), graph.vertex_id("a"));
    }

    #[test]
    fn adjacency_follows_declaration_order() {
        let graph = Graph::from_records(&[
            EdgeRecord::new("A", "C", 1, 1),
            EdgeRecord::new("A", "B", 1, 1),
            EdgeRecord::new("A", "C", 4, 4),
        ]);

        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        let c = graph.vertex_id("C").unwrap();
        assert_eq!(graph.vertex(a).adjacency(), &[c, b, c]);
    }

    #[test]
    fn first_declared_edge_wins() {
        let graph = Graph::from_records(&[
            EdgeRecord::new("A", "B", 3, 9),
            EdgeRecord::new("A", "B", 1, 1),
        ]);

        let a = graph.vertex_id("A").unwrap();
        let b = graph.vertex_id("B").unwrap();
        let edge = graph.get_edge(a, b).unwrap();
        assert_eq!((edge.cost, edge.time), (3, 9));
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.out_edges(a).all(|edge| edge.cost == 3));
    }

    #[test]
    fn malformed_record_aborts_construction() {
        let records: Vec<Vec<&str>> = vec![vec!["A", "B", "1", "1"], vec!["B", "C", "1"]];
        let error = Graph::try_from_fields::<_, _, &str>(&records).unwrap_err();
        assert!(matches!(error, GraphError::MalformedInput { .. }));
    }

    #[test]
    fn metric_selectors() {
        assert_eq!("C".parse::<Metric>().unwrap(), Metric::Cost);
        assert_eq!("time".parse::<Metric>().unwrap(), Metric::Time);
        assert!("X".parse::<Metric>().is_err());
    }
}
