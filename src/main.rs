use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use spacing_cluster_analyzer::config::{Config, DEFAULT_TARGET_CLUSTERS};
use spacing_cluster_analyzer::{cluster, data, storage};

#[derive(Parser, Debug)]
#[clap(
    name = "spacing-cluster-analyzer",
    about = "Max-spacing k-clustering of a weighted undirected graph"
)]
struct Cli {
    /// Path to the edge list (vertex count, then `vertex vertex cost` lines)
    input: PathBuf,
    
    /// Number of clusters to stop at
    #[clap(default_value_t = DEFAULT_TARGET_CLUSTERS)]
    k: usize,
    
    /// Output directory for JSON results
    #[clap(long)]
    output_dir: Option<PathBuf>,
    
    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();
    
    let config = Config::new(args.k, args.output_dir);
    config.validate()?;
    
    log::info!("Starting max-spacing clustering");
    log::info!("Input: {}", args.input.display());
    
    // 1. Load data
    let graph = data::load_edge_list(&args.input)?;
    
    // 2. Cluster
    let outcome = cluster::max_spacing_clustering(&graph, config.target_clusters)?;
    
    // 3. Save results if requested
    if let Some(dir) = &config.output_dir {
        storage::save_results(&outcome, &graph, dir)?;
    }
    
    println!("{}", outcome.max_distance);
    
    Ok(())
}
