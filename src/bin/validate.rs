use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::ProgressIterator;
use log::info;
use three_paths::{
    graphs::graph_factory::GraphFactory,
    search::{query::read_requests_from_file, validation::validate_ranked_paths},
    utility::get_progressbar,
};

/// Answers every request of a search file and checks the results against a
/// classical Dijkstra and the graph's edges.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,
    /// Search file
    #[arg(short, long)]
    searches: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let graph = GraphFactory::from_file(&args.graph)
        .with_context(|| format!("cannot read graph file {:?}", args.graph))?;
    let requests = read_requests_from_file(&args.searches)
        .with_context(|| format!("cannot read search file {:?}", args.searches))?;

    let bar = get_progressbar("Validating", requests.len() as u64);
    for (index, request) in requests.iter().enumerate().progress_with(bar) {
        let results = graph.find_top_three_paths_for(request);
        if let Err(reason) = validate_ranked_paths(&graph, request, &results) {
            bail!(
                "request {} ({} -> {} by {}): {}",
                index + 1,
                request.source,
                request.target,
                request.metric,
                reason
            );
        }
    }

    info!("all {} requests are correct", requests.len());
    Ok(())
}
