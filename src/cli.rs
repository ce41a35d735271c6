use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank NBA games by how exciting they were to watch")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Score the most recent cached games and print them ranked
    Rank {
        #[command(flatten)]
        source: SourceArgs,
        /// Maximum number of games to analyze (defaults to 20)
        #[arg(short, long, value_parser = parse_limit)]
        limit: Option<usize>,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the score breakdown and line score of a single game
    Detail {
        /// Game identifier, e.g. 0022300061
        game_id: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the letter grade for a total score
    Grade {
        /// Total score between 0 and 100
        score: f64,
    },
    /// Print the effective scoring weights
    Weights {
        /// JSON file overriding the default weights
        #[arg(short, long)]
        weights: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct SourceArgs {
    /// Directory holding cached game data
    #[arg(short, long)]
    pub cache_dir: Option<PathBuf>,
    /// JSON file overriding the default weights
    #[arg(short, long)]
    pub weights: Option<PathBuf>,
}

fn parse_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}
