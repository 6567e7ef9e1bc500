use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use three_paths::{
    graphs::graph_factory::GraphFactory,
    report::{write_json_report, write_report},
    search::{query::read_requests_from_file, run_requests_with_progress},
    utility::get_progressbar,
};

/// Finds the three best paths for every request of a search file and writes
/// them to a result file. Paths that are not given are asked for on stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file, `count` followed by `from|to|cost|time` lines
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Search file, `count` followed by `from|to|C` or `from|to|T` lines
    #[arg(short, long)]
    searches: Option<PathBuf>,
    /// Path where the results shall be saved
    #[arg(short, long)]
    results: Option<PathBuf>,
    /// Also write the results as JSON
    #[arg(short, long)]
    json: Option<PathBuf>,
    /// Also print the results to stdout
    #[arg(short, long)]
    echo: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let graph_path = path_or_prompt(args.graph, "Graph file name:  ")?;
    let searches_path = path_or_prompt(args.searches, "Search file name: ")?;
    let results_path = path_or_prompt(args.results, "Result file name: ")?;

    let graph = GraphFactory::from_file(&graph_path)
        .with_context(|| format!("cannot read graph file {:?}", graph_path))?;
    let requests = read_requests_from_file(&searches_path)
        .with_context(|| format!("cannot read search file {:?}", searches_path))?;
    info!("answering {} requests", requests.len());

    let bar = get_progressbar("Searching paths", requests.len() as u64);
    let results = run_requests_with_progress(&graph, &requests, bar.clone());
    bar.finish_and_clear();

    let mut writer = BufWriter::new(
        File::create(&results_path)
            .with_context(|| format!("cannot create result file {:?}", results_path))?,
    );
    write_report(&mut writer, &requests, &results)?;

    if args.echo {
        write_report(&mut io::stdout().lock(), &requests, &results)?;
    }

    if let Some(json_path) = args.json {
        let writer = BufWriter::new(
            File::create(&json_path)
                .with_context(|| format!("cannot create json file {:?}", json_path))?,
        );
        write_json_report(writer, &requests, &results)?;
    }

    Ok(())
}

fn path_or_prompt(path: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        anyhow::bail!("no file name given");
    }
    Ok(PathBuf::from(line))
}
