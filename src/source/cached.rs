use std::path::Path;

use anyhow::Result;
use log::info;
use serde_json::Value;

use super::GameDataSource;
use crate::cache::Cache;
use crate::domain::rows::{parse_rows, RawPlayRow, RawPlayerRow, RawTeamRow};
use crate::domain::{PlayEvent, PlayerLine, TeamGameStat};

const GAMES_KEY: &str = "games";
const PLAY_BY_PLAY_PREFIX: &str = "pbp";
const BOX_SCORE_PREFIX: &str = "boxscore";

/// Game tables read from the on-disk cache.
///
/// Layout under `<cache>/parsed/`:
/// - `games.json`: league game-finder rows
/// - `pbp/<game_id>.json`: play-by-play rows
/// - `boxscore/<game_id>.json`: traditional box-score player rows
pub struct CachedSource {
    cache: Cache,
}

impl CachedSource {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Self {
        Self {
            cache: Cache::open(cache_dir),
        }
    }

    /// Rows of one cached table, left untyped so a bad row cannot fail the rest.
    fn load_rows(&self, key: &str) -> Result<Vec<Value>> {
        Ok(self.cache.load_parsed(key)?.unwrap_or_default())
    }
}

impl GameDataSource for CachedSource {
    fn team_stats(&self) -> Result<Vec<TeamGameStat>> {
        let rows = self.load_rows(GAMES_KEY)?;
        info!(
            "  → Loaded {} team rows from {}",
            rows.len(),
            self.cache.root().display()
        );
        Ok(parse_rows::<RawTeamRow, _>(rows, "team stats"))
    }

    fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>> {
        let rows = self.load_rows(&format!("{}/{}", PLAY_BY_PLAY_PREFIX, game_id))?;
        Ok(parse_rows::<RawPlayRow, _>(rows, "play-by-play"))
    }

    fn box_score(&self, game_id: &str) -> Result<Vec<PlayerLine>> {
        let rows = self.load_rows(&format!("{}/{}", BOX_SCORE_PREFIX, game_id))?;
        Ok(parse_rows::<RawPlayerRow, _>(rows, "box score"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let parsed = dir.join("parsed");
        fs::create_dir_all(parsed.join("pbp")).unwrap();
        fs::create_dir_all(parsed.join("boxscore")).unwrap();

        fs::write(
            parsed.join("games.json"),
            r#"[
                {"GAME_ID":"0022300500","TEAM_ID":1,"MATCHUP":"AAA @ BBB","GAME_DATE":"2024-01-20",
                 "FGM":40,"FGA":85,"FG_PCT":0.471,"FG3M":10,"FG3A":30,"FG3_PCT":0.333},
                {"GAME_ID":"0022300500","TEAM_ID":2,"MATCHUP":"BBB vs. AAA","GAME_DATE":"2024-01-20"},
                {"TEAM_ID":3}
            ]"#,
        )
        .unwrap();
        fs::write(
            parsed.join("pbp/0022300500.json"),
            r#"[
                {"PERIOD":1,"EVENTMSGTYPE":12,"PCTIMESTRING":"12:00","SCORE":null,"SCOREMARGIN":null},
                {"PERIOD":1,"EVENTMSGTYPE":1,"PCTIMESTRING":"11:31","SCORE":"0 - 2","SCOREMARGIN":"2"},
                {"EVENTMSGTYPE":1}
            ]"#,
        )
        .unwrap();
        fs::write(
            parsed.join("boxscore/0022300500.json"),
            r#"[{"GAME_ID":"0022300500","TEAM_ID":1,"PLAYER_NAME":"A. Guard","PTS":33},
                {"GAME_ID":"0022300500","TEAM_ID":2,"PLAYER_NAME":"B. Wing","PTS":null}]"#,
        )
        .unwrap();

        dir
    }

    #[test]
    fn test_cached_source_reads_and_validates() {
        let dir = write_fixture("nba_ranking_test_cached_source");
        let source = CachedSource::new(&dir);

        let stats = source.team_stats().unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].fg_pct, Some(0.471));

        let events = source.play_by_play("0022300500").unwrap();
        assert_eq!(events.len(), 2);

        let lines = source.box_score("0022300500").unwrap();
        assert_eq!(lines.iter().map(|l| l.points).max(), Some(33));

        assert!(source.play_by_play("unknown").unwrap().is_empty());

        // Cleanup
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_mistyped_cells_only_drop_their_rows() {
        let dir = std::env::temp_dir().join("nba_ranking_test_mistyped_rows");
        let parsed = dir.join("parsed");
        fs::create_dir_all(parsed.join("pbp")).unwrap();
        fs::write(
            parsed.join("games.json"),
            r#"[
                {"GAME_ID":"g1","TEAM_ID":1,"MATCHUP":"AAA @ BBB","GAME_DATE":"2024-01-20"},
                {"GAME_ID":1234,"TEAM_ID":"two","MATCHUP":"BBB vs. AAA"}
            ]"#,
        )
        .unwrap();
        fs::write(
            parsed.join("pbp/g1.json"),
            r#"[
                {"PERIOD":1,"EVENTMSGTYPE":1,"PCTIMESTRING":"11:31","SCORE":"0 - 2","SCOREMARGIN":"2"},
                {"PERIOD":"1","EVENTMSGTYPE":1,"PCTIMESTRING":"11:00","SCORE":"3 - 2","SCOREMARGIN":"-1"}
            ]"#,
        )
        .unwrap();

        let source = CachedSource::new(&dir);

        let stats = source.team_stats().unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].game_id, "g1");

        let events = source.play_by_play("g1").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].clock, "11:31");

        // Cleanup
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_cache_dir_yields_no_data() {
        let source = CachedSource::new("/nonexistent/nba_ranking_cache");
        assert!(source.team_stats().unwrap().is_empty());
        assert!(source.box_score("1").unwrap().is_empty());
    }
}
