use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{Metric, Weight};

pub const NO_PATH: &str = "No available path.";

/// A path found by a ranked search, named vertices from source to
/// destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPath {
    pub vertices: Vec<String>,
    pub cost: Weight,
    pub time: Weight,
}

impl RankedPath {
    pub fn value(&self, metric: Metric) -> Weight {
        match metric {
            Metric::Cost => self.cost,
            Metric::Time => self.time,
        }
    }
}

impl fmt::Display for RankedPath {
    /// `A -> B -> C. Time: 7, Cost: 12`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Time: {}, Cost: {}",
            self.vertices.iter().join(" -> "),
            self.time,
            self.cost
        )
    }
}

/// Outcome of one rank slot. Serialized as the path or `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<RankedPath>", into = "Option<RankedPath>")]
pub enum PathResult {
    Found(RankedPath),
    NoPath,
}

impl PathResult {
    pub fn path(&self) -> Option<&RankedPath> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}

impl From<Option<RankedPath>> for PathResult {
    fn from(path: Option<RankedPath>) -> Self {
        match path {
            Some(path) => PathResult::Found(path),
            None => PathResult::NoPath,
        }
    }
}

impl From<PathResult> for Option<RankedPath> {
    fn from(result: PathResult) -> Self {
        match result {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Found(path) => fmt::Display::fmt(path, f),
            PathResult::NoPath => f.write_str(NO_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_path_with_trailer() {
        let path = RankedPath {
            vertices: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            cost: 12,
            time: 7,
        };
        assert_eq!(
            PathResult::Found(path).to_string(),
            "A -> B -> C. Time: 7, Cost: 12"
        );
    }

    #[test]
    fn formats_single_vertex_path() {
        let path = RankedPath {
            vertices: vec!["A".to_string()],
            cost: 0,
            time: 0,
        };
        assert_eq!(path.to_string(), "A. Time: 0, Cost: 0");
    }

    #[test]
    fn formats_no_path() {
        assert_eq!(PathResult::NoPath.to_string(), "No available path.");
    }

    #[test]
    fn serializes_no_path_as_null() {
        let json = serde_json::to_string(&[PathResult::NoPath]).unwrap();
        assert_eq!(json, "[null]");
    }
}
