use chrono::NaiveDate;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::{EventKind, GameScore, PlayEvent, PlayerLine, ScoreMargin, TeamGameStat};
use crate::errors::RowError;

// --- Upstream Row Structures ---

/// A cell the stats provider sends either as a number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Number(f64),
    Text(String),
}

/// Raw play-by-play row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlayRow {
    #[serde(rename = "GAME_ID", default)]
    pub game_id: Option<String>,
    #[serde(rename = "PERIOD", default)]
    pub period: Option<i64>,
    #[serde(rename = "EVENTMSGTYPE", default)]
    pub event_type: Option<i64>,
    #[serde(rename = "PCTIMESTRING", default)]
    pub clock: Option<String>,
    #[serde(rename = "SCORE", default)]
    pub score: Option<String>,
    #[serde(rename = "SCOREMARGIN", default)]
    pub score_margin: Option<RawCell>,
}

/// Raw league game-finder row (one per team per game)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTeamRow {
    #[serde(rename = "GAME_ID", default)]
    pub game_id: Option<String>,
    #[serde(rename = "TEAM_ID", default)]
    pub team_id: Option<i64>,
    #[serde(rename = "TEAM_ABBREVIATION", default)]
    pub team_abbreviation: Option<String>,
    #[serde(rename = "GAME_DATE", default)]
    pub game_date: Option<String>,
    #[serde(rename = "MATCHUP", default)]
    pub matchup: Option<String>,
    #[serde(rename = "FGM", default)]
    pub fgm: Option<f64>,
    #[serde(rename = "FGA", default)]
    pub fga: Option<f64>,
    #[serde(rename = "FG3M", default)]
    pub fg3m: Option<f64>,
    #[serde(rename = "FG3A", default)]
    pub fg3a: Option<f64>,
    #[serde(rename = "FG_PCT", default)]
    pub fg_pct: Option<f64>,
    #[serde(rename = "FG3_PCT", default)]
    pub fg3_pct: Option<f64>,
}

/// Raw traditional box-score player row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlayerRow {
    #[serde(rename = "GAME_ID", default)]
    pub game_id: Option<String>,
    #[serde(rename = "TEAM_ID", default)]
    pub team_id: Option<i64>,
    #[serde(rename = "PLAYER_NAME", default)]
    pub player_name: Option<String>,
    #[serde(rename = "PTS", default)]
    pub points: Option<f64>,
}

// --- Validation ---

impl TryFrom<RawPlayRow> for PlayEvent {
    type Error = RowError;

    fn try_from(row: RawPlayRow) -> Result<Self, Self::Error> {
        let period = row.period.ok_or(RowError::MissingField("PERIOD"))?;
        let period = u8::try_from(period)
            .ok()
            .filter(|p| *p > 0)
            .ok_or(RowError::InvalidPeriod(period))?;

        let event_type = row.event_type.ok_or(RowError::MissingField("EVENTMSGTYPE"))?;
        let code = i32::try_from(event_type).map_err(|_| RowError::InvalidEventType(event_type))?;

        Ok(PlayEvent {
            period,
            kind: EventKind::from_code(code),
            margin: row.score_margin.map(margin_from_cell).unwrap_or_default(),
            clock: row.clock.unwrap_or_default(),
            score: row.score.as_deref().and_then(GameScore::parse),
        })
    }
}

impl TryFrom<RawTeamRow> for TeamGameStat {
    type Error = RowError;

    fn try_from(row: RawTeamRow) -> Result<Self, Self::Error> {
        let game_id = row.game_id.ok_or(RowError::MissingField("GAME_ID"))?;
        let team_id = row.team_id.ok_or(RowError::MissingField("TEAM_ID"))?;

        Ok(TeamGameStat {
            game_id,
            team_id,
            team_abbreviation: row.team_abbreviation.unwrap_or_default(),
            matchup: row.matchup.unwrap_or_default(),
            game_date: row.game_date.as_deref().and_then(parse_game_date),
            fgm: count(row.fgm),
            fga: count(row.fga),
            fg3m: count(row.fg3m),
            fg3a: count(row.fg3a),
            fg_pct: row.fg_pct.filter(|p| p.is_finite()),
            fg3_pct: row.fg3_pct.filter(|p| p.is_finite()),
            max_player_points: None,
        })
    }
}

impl TryFrom<RawPlayerRow> for PlayerLine {
    type Error = RowError;

    fn try_from(row: RawPlayerRow) -> Result<Self, Self::Error> {
        let game_id = row.game_id.ok_or(RowError::MissingField("GAME_ID"))?;

        Ok(PlayerLine {
            game_id,
            team_id: row.team_id.unwrap_or_default(),
            player_name: row.player_name.unwrap_or_default(),
            points: count(row.points),
        })
    }
}

/// Decode untyped JSON rows one by one, then validate them.
///
/// Rows that fail either step are logged and dropped. A row whose cells
/// have the wrong JSON type is rejected on its own instead of failing the
/// whole table.
pub fn parse_rows<R, T>(values: Vec<Value>, table: &str) -> Vec<T>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = RowError>,
{
    let mut rejected = 0;
    let valid = values
        .into_iter()
        .map(|value| {
            serde_json::from_value::<R>(value)
                .map_err(|e| RowError::Malformed(e.to_string()))
                .and_then(T::try_from)
        })
        .filter_map(|row| match row {
            Ok(value) => Some(value),
            Err(e) => {
                rejected += 1;
                debug!("Rejected {} row: {}", table, e);
                None
            }
        })
        .collect();

    if rejected > 0 {
        warn!("Rejected {} malformed {} rows", rejected, table);
    }

    valid
}

fn margin_from_cell(cell: RawCell) -> ScoreMargin {
    match cell {
        RawCell::Number(value) if value.is_finite() => {
            ScoreMargin::from_value(value.round() as i32)
        }
        RawCell::Number(_) => ScoreMargin::Missing,
        RawCell::Text(text) => ScoreMargin::parse(&text),
    }
}

fn count(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u32)
        .unwrap_or(0)
}

fn parse_game_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
