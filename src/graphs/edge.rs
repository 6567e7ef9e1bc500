use serde::{Deserialize, Serialize};

use super::{Metric, VertexId, Weight};
use crate::error::{GraphError, Result};

/// One `from|to|cost|time` line of a graph file, before vertex names are
/// resolved to ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub cost: Weight,
    pub time: Weight,
}

impl EdgeRecord {
    pub fn new(from: &str, to: &str, cost: Weight, time: Weight) -> EdgeRecord {
        EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            cost,
            time,
        }
    }

    /// Builds a record from already split fields. Exactly four fields are
    /// accepted and both weights have to be integers. Names are taken as
    /// they are, surrounding spaces included.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<EdgeRecord> {
        if fields.len() != 4 {
            return Err(GraphError::malformed(
                0,
                format!("expected 4 fields, found {}", fields.len()),
            ));
        }

        let parse_weight = |index: usize, name: &str| {
            let field = fields[index].as_ref().trim();
            field.parse::<Weight>().map_err(|_| {
                GraphError::malformed(0, format!("unable to parse {} '{}'", name, field))
            })
        };

        Ok(EdgeRecord {
            from: fields[0].as_ref().to_string(),
            to: fields[1].as_ref().to_string(),
            cost: parse_weight(2, "cost")?,
            time: parse_weight(3, "time")?,
        })
    }
}

/// Directed edge between two vertices of a graph. Its identity is the
/// ordered pair `(tail, head)`, see [`DirectedEdge`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub cost: Weight,
    pub time: Weight,
}

impl WeightedEdge {
    pub fn weight(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Cost => self.cost,
            Metric::Time => self.time,
        }
    }

    pub fn unweighted(&self) -> DirectedEdge {
        DirectedEdge {
            tail: self.tail,
            head: self.head,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct DirectedEdge {
    pub tail: VertexId,
    pub head: VertexId,
}

impl DirectedEdge {
    pub fn new(tail: VertexId, head: VertexId) -> DirectedEdge {
        DirectedEdge { tail, head }
    }
}
