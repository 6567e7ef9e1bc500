use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use three_paths::{
    graphs::{
        graph_factory::GraphFactory,
        graph_functions::{random_edge_records, random_requests},
    },
    search::query::write_requests,
};

/// Generates a random graph file and a search file with random requests on
/// it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(short, long, default_value_t = 100)]
    vertices: u32,
    /// Number of edges
    #[arg(short, long, default_value_t = 400)]
    edges: u32,
    /// Number of requests in the search file
    #[arg(short, long, default_value_t = 20)]
    requests: u32,
    /// Largest cost and time of an edge
    #[arg(short, long, default_value_t = 100)]
    max_weight: i64,
    /// Seed of the random number generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Path where the graph file shall be saved
    #[arg(short, long)]
    graph: PathBuf,
    /// Path where the search file shall be saved
    #[arg(short, long)]
    searches: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let records = random_edge_records(&mut rng, args.vertices, args.edges, args.max_weight);
    let requests = random_requests(&mut rng, args.vertices, args.requests);

    info!("writing {} edges to {:?}", records.len(), args.graph);
    let mut writer = BufWriter::new(
        File::create(&args.graph).with_context(|| format!("cannot create {:?}", args.graph))?,
    );
    GraphFactory::write_edge_records(&mut writer, &records)?;

    info!("writing {} requests to {:?}", requests.len(), args.searches);
    let mut writer = BufWriter::new(
        File::create(&args.searches)
            .with_context(|| format!("cannot create {:?}", args.searches))?,
    );
    write_requests(&mut writer, &requests)?;

    Ok(())
}
