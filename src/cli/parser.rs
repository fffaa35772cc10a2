//! CLI argument parsing and structure definitions

use clap::{Parser, Subcommand, ValueEnum};

use super::commands::{ClusterArgs, SplitArgs, ValidateArgs};

/// Entity coreference clustering for detected mentions
#[derive(Parser, Debug)]
#[command(name = "coref")]
#[command(
    author,
    version,
    about = "Entity coreference clustering for detected mentions",
    long_about = r#"
coref - group entity mentions that refer to the same thing

Mentions are linked when one is the full name or acronym of the other
("Support Vector Machine (SVM)") or when their character bigrams are
similar enough. Clusters are the connected components of those links.

INPUT:
  A JSON array of mentions, a JSON array of annotated documents, or JSONL
  with one mention per line. A mention looks like
  {"parent_doc_id": 1, "start": 0, "text": "SVM", "class": "METHOD"}

EXAMPLES:
  coref cluster mentions.json
  coref cluster --threshold 0.6 --format text < mentions.jsonl
  coref split "Support Vector Machine (SVM)"
  coref validate documents.json
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cluster mentions
    #[command(visible_alias = "c")]
    Cluster(ClusterArgs),

    /// Show the full-name / acronym split of a text
    #[command(visible_alias = "s")]
    Split(SplitArgs),

    /// Check that document mentions line up with the document text
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// One line per cluster
    Text,
}
