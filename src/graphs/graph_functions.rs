use rand::prelude::*;

use super::{edge::EdgeRecord, Metric, Weight};
use crate::search::query::ShortestPathRequest;

pub fn vertex_name(index: u32) -> String {
    format!("V{}", index)
}

/// `number_of_edges` random edges between `number_of_vertices` vertices
/// named `V0`, `V1`, ... with weights in `1..=max_weight`. Self loops are
/// never generated, repeated endpoint pairs may be.
pub fn random_edge_records<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
) -> Vec<EdgeRecord> {
    if number_of_vertices < 2 {
        return Vec::new();
    }

    (0..number_of_edges)
        .map(|_| {
            let tail = rng.gen_range(0..number_of_vertices);
            let mut head = rng.gen_range(0..number_of_vertices - 1);
            if head >= tail {
                head += 1;
            }
            EdgeRecord::new(
                &vertex_name(tail),
                &vertex_name(head),
                rng.gen_range(1..=max_weight.max(1)),
                rng.gen_range(1..=max_weight.max(1)),
            )
        })
        .collect()
}

pub fn random_requests<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    number_of_requests: u32,
) -> Vec<ShortestPathRequest> {
    if number_of_vertices == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            let metric = if rng.gen_bool(0.5) {
                Metric::Cost
            } else {
                Metric::Time
            };
            ShortestPathRequest::new(
                &vertex_name(rng.gen_range(0..number_of_vertices)),
                &vertex_name(rng.gen_range(0..number_of_vertices)),
                metric,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn random_edges_have_no_self_loops() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = random_edge_records(&mut rng, 5, 200, 9);

        assert_eq!(records.len(), 200);
        assert!(records.iter().all(|record| record.from != record.to));
        assert!(records
            .iter()
            .all(|record| (1..=9).contains(&record.cost) && (1..=9).contains(&record.time)));
    }
}
