//! Ranked path search on weighted directed graphs of named vertices: for a
//! source, a destination and a metric (cumulative cost or time) it finds up
//! to three paths with distinct values in a single modified Dijkstra pass.

pub mod error;
pub mod graphs;
pub mod report;
pub mod search;
pub mod utility;

pub use error::{GraphError, Result};
pub use graphs::{edge::EdgeRecord, Graph, Metric};
pub use search::{path::PathResult, query::ShortestPathRequest};
