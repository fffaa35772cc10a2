//! coref - entity coreference clustering CLI
//!
//! # Usage
//!
//! ```bash
//! # Cluster mentions from a file
//! coref cluster mentions.json
//!
//! # Lower threshold, plain-text output, stdin input
//! COREF_SIM_THRESHOLD=0.6 coref cluster --format text < mentions.jsonl
//!
//! # Inspect the acronym split of a mention
//! coref split "Support Vector Machine (SVM)"
//!
//! # Check mention offsets in annotated documents
//! coref validate documents.json
//! ```

use std::process::ExitCode;

use clap::Parser;

use coref::cli::commands::{cluster, split, validate};
use coref::cli::output::format_error;
use coref::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let (operation, result) = match cli.command {
        Commands::Cluster(args) => ("cluster", cluster::run(args)),
        Commands::Split(args) => ("split", split::run(args)),
        Commands::Validate(args) => ("validate", validate::run(args)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(operation, &e));
            ExitCode::FAILURE
        }
    }
}
