use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::time_code;

/// Home score minus away score at a play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreMargin {
    Lead(i32),
    Tie,
    #[default]
    Missing,
}

impl ScoreMargin {
    pub fn from_value(value: i32) -> Self {
        if value == 0 {
            ScoreMargin::Tie
        } else {
            ScoreMargin::Lead(value)
        }
    }

    /// Parse an upstream margin token ("TIE", "5", "-3"). Anything else is `Missing`.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("TIE") {
            return ScoreMargin::Tie;
        }

        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_value(value.round() as i32),
            _ => ScoreMargin::Missing,
        }
    }

    /// Numeric margin with a tie counted as 0; `None` when nothing was recorded.
    pub fn value(self) -> Option<i32> {
        match self {
            ScoreMargin::Lead(value) => Some(value),
            ScoreMargin::Tie => Some(0),
            ScoreMargin::Missing => None,
        }
    }

    /// Margin only when one team is ahead.
    pub fn lead(self) -> Option<i32> {
        match self {
            ScoreMargin::Lead(value) if value != 0 => Some(value),
            _ => None,
        }
    }
}

/// Play type, decoded from the upstream `EVENTMSGTYPE` code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    FieldGoalMade,
    FieldGoalMissed,
    FreeThrow,
    Rebound,
    Turnover,
    Foul,
    Violation,
    Substitution,
    Timeout,
    JumpBall,
    Ejection,
    PeriodStart,
    PeriodEnd,
    Other(i32),
}

impl EventKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => EventKind::FieldGoalMade,
            2 => EventKind::FieldGoalMissed,
            3 => EventKind::FreeThrow,
            4 => EventKind::Rebound,
            5 => EventKind::Turnover,
            6 => EventKind::Foul,
            7 => EventKind::Violation,
            8 => EventKind::Substitution,
            9 => EventKind::Timeout,
            10 => EventKind::JumpBall,
            11 => EventKind::Ejection,
            12 => EventKind::PeriodStart,
            13 => EventKind::PeriodEnd,
            other => EventKind::Other(other),
        }
    }

    /// Made field goals and free throws
    pub fn is_scoring(self) -> bool {
        matches!(self, EventKind::FieldGoalMade | EventKind::FreeThrow)
    }
}

/// Cumulative score, written upstream as "away - home"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub away: u32,
    pub home: u32,
}

impl GameScore {
    pub fn parse(text: &str) -> Option<Self> {
        let (away, home) = text.split_once('-')?;
        Some(Self {
            away: away.trim().parse().ok()?,
            home: home.trim().parse().ok()?,
        })
    }
}

/// One play-by-play row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub period: u8,
    pub kind: EventKind,
    pub margin: ScoreMargin,
    pub clock: String,
    pub score: Option<GameScore>,
}

impl PlayEvent {
    pub fn seconds_remaining(&self) -> f64 {
        time_code::parse_clock(&self.clock)
    }
}

/// One box-score row per team per game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamGameStat {
    pub game_id: String,
    pub team_id: i64,
    pub team_abbreviation: String,
    pub matchup: String,
    pub game_date: Option<NaiveDate>,
    pub fgm: u32,
    pub fga: u32,
    pub fg3m: u32,
    pub fg3a: u32,
    pub fg_pct: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub max_player_points: Option<u32>,
}

impl TeamGameStat {
    pub fn field_goal_pct(&self) -> f64 {
        self.fg_pct.unwrap_or_else(|| ratio(self.fgm, self.fga))
    }

    pub fn three_point_pct(&self) -> f64 {
        self.fg3_pct.unwrap_or_else(|| ratio(self.fg3m, self.fg3a))
    }

    pub fn is_away_row(&self) -> bool {
        self.matchup.contains('@')
    }
}

fn ratio(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempted)
    }
}

/// Individual scoring line from a box score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub game_id: String,
    pub team_id: i64,
    pub player_name: String,
    pub points: u32,
}

/// Identity of a game to analyze
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub game_id: String,
    pub date: Option<NaiveDate>,
    pub matchup: String,
}

impl GameInfo {
    pub fn new(
        game_id: impl Into<String>,
        date: Option<NaiveDate>,
        matchup: impl Into<String>,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            date,
            matchup: matchup.into(),
        }
    }
}

impl From<&TeamGameStat> for GameInfo {
    fn from(row: &TeamGameStat) -> Self {
        Self::new(row.game_id.clone(), row.game_date, row.matchup.clone())
    }
}

/// Everything the scorers need for one game, already materialized
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub events: Vec<PlayEvent>,
    pub team_stats: Vec<TeamGameStat>,
    pub player_lines: Vec<PlayerLine>,
}

impl GameData {
    /// Highest period present in the play-by-play, 0 when there are no events.
    pub fn period_count(&self) -> u8 {
        self.events.iter().map(|e| e.period).max().unwrap_or(0)
    }
}
