use anyhow::Result;

use nba_game_ranking::cli::Command;
use nba_game_ranking::{
    handle_completions, handle_detail, handle_grade, handle_rank, handle_weights, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rank {
            source,
            limit,
            json,
        } => handle_rank(source, *limit, *json),
        Command::Detail { game_id, source } => handle_detail(game_id, source),
        Command::Grade { score } => handle_grade(*score),
        Command::Weights { weights } => handle_weights(weights.as_deref()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
