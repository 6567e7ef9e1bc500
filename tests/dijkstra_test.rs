use rand::{rngs::StdRng, SeedableRng};
use three_paths::{
    graphs::{
        graph_functions::{random_edge_records, vertex_name},
        Graph, Metric,
    },
    search::{
        dijkstra::shortest_path_value, query::ShortestPathRequest, run_requests,
        validation::validate_ranked_paths,
    },
};

fn random_graph(seed: u64, number_of_vertices: u32, number_of_edges: u32) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    Graph::from_records(&random_edge_records(
        &mut rng,
        number_of_vertices,
        number_of_edges,
        20,
    ))
}

fn all_requests(number_of_vertices: u32) -> Vec<ShortestPathRequest> {
    let mut requests = Vec::new();
    for source in 0..number_of_vertices {
        for target in 0..number_of_vertices {
            for metric in [Metric::Cost, Metric::Time] {
                requests.push(ShortestPathRequest::new(
                    &vertex_name(source),
                    &vertex_name(target),
                    metric,
                ));
            }
        }
    }
    requests
}

#[test]
fn ranked_paths_agree_with_dijkstra() {
    for seed in 0..20 {
        let graph = random_graph(seed, 10, 25);

        for request in all_requests(10) {
            let results = graph.find_top_three_paths_for(&request);
            if let Err(reason) = validate_ranked_paths(&graph, &request, &results) {
                panic!("seed {} request {:?}: {}", seed, request, reason);
            }
        }
    }
}

#[test]
fn dense_graphs_rank_three_paths() {
    let graph = random_graph(42, 8, 40);

    let found_three = all_requests(8)
        .iter()
        .filter(|request| request.source != request.target)
        .filter(|request| graph.find_top_three_paths_for(request)[2].is_found())
        .count();

    assert!(found_three > 0);
}

#[test]
fn first_rank_is_shortest_path_value() {
    let graph = random_graph(3, 30, 90);

    for request in all_requests(30).iter().step_by(7) {
        let results = graph.find_top_three_paths_for(request);
        let first = results[0].path().map(|path| path.value(request.metric));
        assert_eq!(
            first,
            shortest_path_value(&graph, &request.source, &request.target, request.metric)
        );
    }
}

#[test]
fn parallel_batch_matches_sequential() {
    let graph = random_graph(11, 15, 45);
    let requests = all_requests(15);

    let parallel = run_requests(&graph, &requests);
    let sequential: Vec<_> = requests
        .iter()
        .map(|request| graph.find_top_three_paths_for(request))
        .collect();

    assert_eq!(parallel, sequential);
}
