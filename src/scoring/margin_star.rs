use super::curve::{falling, full_points, mean, rising};
use crate::domain::{PlayEvent, PlayerLine, TeamGameStat};

/// Plays in the final period with at least this much clock left form the margin window
pub const MARGIN_WINDOW_SECS: f64 = 300.0;

const MARGIN_FULL: f64 = 5.0;
const MARGIN_ZERO: f64 = 15.0;
const STAR_POINTS_ZERO: f64 = 20.0;
const STAR_POINTS_FULL: f64 = 35.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarginStarScore {
    pub average_margin: f64,
    pub margin_score: f64,
    pub max_points: u32,
    pub star_score: f64,
}

pub fn score_margin_and_star(
    events: &[PlayEvent],
    team_rows: &[TeamGameStat],
    player_lines: &[PlayerLine],
    margin_weight: f64,
    star_weight: f64,
) -> MarginStarScore {
    let average_margin = average_final_margin(events);
    let max_points = max_player_points(team_rows, player_lines);

    MarginStarScore {
        average_margin,
        margin_score: margin_score(average_margin, margin_weight),
        max_points,
        star_score: star_score(max_points, star_weight),
    }
}

/// Mean absolute margin over the margin window of the last period played.
///
/// Ties count as 0 and plays without a recorded margin are skipped.
pub fn average_final_margin(events: &[PlayEvent]) -> f64 {
    let Some(final_period) = events.iter().map(|e| e.period).max() else {
        return 0.0;
    };

    mean(
        events
            .iter()
            .filter(|e| e.period == final_period)
            .filter(|e| e.seconds_remaining() >= MARGIN_WINDOW_SECS)
            .filter_map(|e| e.margin.value())
            .map(|m| f64::from(m.unsigned_abs())),
    )
}

/// Highest individual point total, preferring box-score player lines and
/// falling back to the per-team leaders.
pub fn max_player_points(team_rows: &[TeamGameStat], player_lines: &[PlayerLine]) -> u32 {
    let from_lines = player_lines.iter().map(|p| p.points).max();
    let from_teams = team_rows.iter().filter_map(|t| t.max_player_points).max();

    from_lines.or(from_teams).unwrap_or(0)
}

pub fn margin_score(average_margin: f64, weight: f64) -> f64 {
    falling(average_margin, MARGIN_FULL, MARGIN_ZERO, full_points(weight))
}

pub fn star_score(max_points: u32, weight: f64) -> f64 {
    rising(
        f64::from(max_points),
        STAR_POINTS_ZERO,
        STAR_POINTS_FULL,
        full_points(weight),
    )
}
