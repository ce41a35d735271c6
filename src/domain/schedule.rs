use std::collections::HashSet;

use log::info;

use super::models::{GameInfo, TeamGameStat};

pub const DEFAULT_MAX_GAMES: usize = 20;

/// Pick the most recent games to analyze from league game-finder rows.
///
/// Every game shows up once per team. Rows are ordered newest first, the
/// window is capped at two rows per requested game, and the away-team row
/// (matchup contains "@") is used to identify each game. When the window has
/// no away rows, all rows in it are used instead.
pub fn select_games(rows: &[TeamGameStat], max_games: usize) -> Vec<GameInfo> {
    let window = recent_window(rows, max_games);

    let away_rows: Vec<&TeamGameStat> =
        window.iter().copied().filter(|r| r.is_away_row()).collect();
    let candidates = if away_rows.is_empty() {
        info!("No away matches found, using all recent games instead");
        window
    } else {
        away_rows
    };

    let mut games = dedupe_by_game(candidates);
    games.truncate(max_games);
    games
}

fn recent_window(rows: &[TeamGameStat], max_games: usize) -> Vec<&TeamGameStat> {
    let mut sorted: Vec<&TeamGameStat> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        b.game_date
            .cmp(&a.game_date)
            .then_with(|| b.game_id.cmp(&a.game_id))
    });
    sorted.truncate(max_games.saturating_mul(2));
    sorted
}

fn dedupe_by_game(rows: Vec<&TeamGameStat>) -> Vec<GameInfo> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert(row.game_id.clone()))
        .map(GameInfo::from)
        .collect()
}
