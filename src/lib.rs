pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod scoring;
pub mod services;
pub mod source;

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::{info, warn};

use crate::cli::{Command, SourceArgs};
use crate::config::settings::AppConfig;
use crate::config::weights::WeightConfig;
use crate::domain::{period_points, select_games, GameInfo};
use crate::scoring::Grade;
use crate::services::analysis::GameAnalyzer;
use crate::services::{rank_results, report, summarize};
use crate::source::{CachedSource, GameDataSource};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(args: &SourceArgs, limit: Option<usize>, json: bool) -> Result<()> {
    let config = load_config(args)?.with_max_games(limit);
    let source = CachedSource::new(&config.source.cache_dir);
    let analyzer = GameAnalyzer::new(&config.weights, &source);

    let team_stats = analyzer.load_team_stats();
    let games = select_games(&team_stats, config.source.max_games);
    if games.is_empty() {
        bail!(
            "No games found in cache directory {}",
            config.source.cache_dir.display()
        );
    }

    info!("Selected {} games for analysis", games.len());
    let ranked = rank_results(analyzer.analyze_games_with(&games, &team_stats));
    let summary = summarize(&ranked);

    if json {
        let output = report::RankingReport {
            games: &ranked,
            summary: &summary,
        };
        println!("{}", report::to_json(&output)?);
    } else {
        print!("{}", report::render_table(&ranked));
        println!();
        print!("{}", report::render_summary(&summary));
    }

    Ok(())
}

pub fn handle_detail(game_id: &str, args: &SourceArgs) -> Result<()> {
    let config = load_config(args)?;
    let source = CachedSource::new(&config.source.cache_dir);
    let analyzer = GameAnalyzer::new(&config.weights, &source);

    let team_stats = analyzer.load_team_stats();
    let game = team_stats
        .iter()
        .find(|row| row.game_id == game_id && row.is_away_row())
        .or_else(|| team_stats.iter().find(|row| row.game_id == game_id))
        .map(GameInfo::from)
        .unwrap_or_else(|| GameInfo::new(game_id, None, ""));

    let result = analyzer.analyze_game(&game);
    let events = source.play_by_play(game_id).unwrap_or_else(|e| {
        warn!("No line score for game {}: {:#}", game_id, e);
        Vec::new()
    });
    print!("{}", report::render_detail(&result, &period_points(&events)));

    Ok(())
}

pub fn handle_grade(score: f64) -> Result<()> {
    if !score.is_finite() {
        bail!("Score must be a finite number, got {}", score);
    }
    println!("{}", Grade::from_score(score));
    Ok(())
}

pub fn handle_weights(weights_file: Option<&Path>) -> Result<()> {
    let weights = match weights_file {
        Some(path) => WeightConfig::from_file(path)?,
        None => WeightConfig::default(),
    };
    println!("{}", report::to_json(&weights)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn load_config(args: &SourceArgs) -> Result<AppConfig> {
    AppConfig::with_overrides(args.cache_dir.as_deref(), args.weights.as_deref())
        .context("Failed to load configuration")
}
