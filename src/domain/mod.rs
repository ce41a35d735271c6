pub mod line_score;
pub mod models;
pub mod rows;
pub mod schedule;

pub use line_score::{period_points, PeriodLine};
pub use models::{
    EventKind, GameData, GameInfo, GameScore, PlayEvent, PlayerLine, ScoreMargin, TeamGameStat,
};
pub use schedule::select_games;
