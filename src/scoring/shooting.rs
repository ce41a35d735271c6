use super::curve::{full_points, rising};
use crate::domain::TeamGameStat;

const FG_PCT_ZERO: f64 = 0.40;
const FG_PCT_FULL: f64 = 0.50;
const FG3_PCT_ZERO: f64 = 0.25;
const FG3_PCT_FULL: f64 = 0.35;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShootingScore {
    pub fg_pct_score: f64,
    pub fg3_pct_score: f64,
    pub combined: f64,
}

/// Best single shooting performance by either team in the game.
///
/// Field-goal and three-point percentages are scored separately for each
/// team row; the combined score is the highest of them, not an average.
pub fn score_shooting(rows: &[TeamGameStat], game_id: &str, weight: f64) -> ShootingScore {
    let game_rows = rows.iter().filter(|r| r.game_id == game_id);

    let (fg_pct_score, fg3_pct_score) = game_rows.fold((0.0, 0.0), |(fg, fg3), row| {
        (
            f64::max(fg, field_goal_score(row.field_goal_pct(), weight)),
            f64::max(fg3, three_point_score(row.three_point_pct(), weight)),
        )
    });

    ShootingScore {
        fg_pct_score,
        fg3_pct_score,
        combined: fg_pct_score.max(fg3_pct_score),
    }
}

pub fn field_goal_score(fg_pct: f64, weight: f64) -> f64 {
    rising(fg_pct, FG_PCT_ZERO, FG_PCT_FULL, full_points(weight))
}

pub fn three_point_score(fg3_pct: f64, weight: f64) -> f64 {
    rising(fg3_pct, FG3_PCT_ZERO, FG3_PCT_FULL, full_points(weight))
}
