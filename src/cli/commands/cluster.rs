//! Cluster command - group mentions into coreference clusters

use clap::Parser;
use std::time::Instant;

use super::super::output::{clusters_to_json, clusters_to_text, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::{parse_mentions, read_input};

use crate::{ClusterMethod, Clusterer, Clusters, CorefConfig};

/// Cluster mentions
#[derive(Parser, Debug)]
pub struct ClusterArgs {
    /// Mentions file (JSON or JSONL); reads stdin if omitted or "-"
    #[arg(value_name = "FILE")]
    pub input: Option<String>,

    /// Similarity threshold for linking mentions (0.0-1.0)
    #[arg(short, long, env = "COREF_SIM_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Clustering method: basic or best
    #[arg(short, long, default_value = "best")]
    pub method: ClusterMethod,

    /// JSON config file; command-line flags take precedence
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Drop input mentions that link to nothing
    #[arg(long)]
    pub no_singletons: bool,

    /// Minimum cluster size to include in output
    #[arg(long, default_value = "1")]
    pub min_cluster_size: usize,

    /// Verify similarity candidates in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output file path (if not specified, prints to stdout)
    #[arg(short = 'o', long)]
    pub output: Option<String>,
}

impl ClusterArgs {
    /// Configuration from defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<CorefConfig, String> {
        let mut config = match &self.config {
            Some(path) => CorefConfig::from_path(path).map_err(|e| e.to_string())?,
            None => CorefConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config.similarity_threshold = threshold;
        }
        if self.no_singletons {
            config.include_singletons = false;
        }
        if self.parallel {
            config.parallel = true;
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// Keep clusters with at least `min_size` members, renumbered from 0.
pub fn filter_min_size(clusters: Clusters, min_size: usize) -> Clusters {
    clusters
        .into_values()
        .filter(|members| members.len() >= min_size)
        .enumerate()
        .collect()
}

/// Run the cluster command.
pub fn run(args: ClusterArgs) -> Result<(), String> {
    let config = args.resolve_config()?;
    let input = read_input(args.input.as_deref())?;
    let mentions = parse_mentions(&input)?;

    let start = Instant::now();
    let clusters = Clusterer::new(args.method)
        .with_config(config)
        .cluster(&mentions)
        .map_err(|e| e.to_string())?;
    log::info!(
        "{} mentions -> {} clusters in {:.1?}",
        mentions.len(),
        clusters.len(),
        start.elapsed()
    );

    let clusters = filter_min_size(clusters, args.min_cluster_size);
    let rendered = match args.format {
        OutputFormat::Json => clusters_to_json(&clusters)?,
        OutputFormat::Text => clusters_to_text(&clusters),
    };
    write_output(&rendered, args.output.as_deref())
}
