use log::{debug, info, warn};

use crate::config::WeightConfig;
use crate::domain::{GameData, GameInfo, PlayEvent, PlayerLine, TeamGameStat};
use crate::scoring::curve::{full_points, round_to_tenth};
use crate::scoring::{
    score_buzzer_beater, score_lead_changes, score_margin_and_star, score_period, score_shooting,
    GameMetrics, GameResult, Grade, ScoreBreakdown,
};
use crate::source::GameDataSource;

const REGULATION_PERIODS: u8 = 4;

/// Runs every scorer for the requested games.
///
/// Each game produces exactly one result: games whose play-by-play cannot
/// be loaded come back as `N/A` instead of being dropped.
pub struct GameAnalyzer<'a> {
    weights: &'a WeightConfig,
    source: &'a dyn GameDataSource,
}

impl<'a> GameAnalyzer<'a> {
    pub fn new(weights: &'a WeightConfig, source: &'a dyn GameDataSource) -> Self {
        Self { weights, source }
    }

    pub fn analyze_games(&self, games: &[GameInfo]) -> Vec<GameResult> {
        let team_stats = self.load_team_stats();
        self.analyze_games_with(games, &team_stats)
    }

    /// Like `analyze_games`, reusing team rows the caller already loaded.
    pub fn analyze_games_with(
        &self,
        games: &[GameInfo],
        team_stats: &[TeamGameStat],
    ) -> Vec<GameResult> {
        info!("=== Analyzing {} games ===", games.len());

        let results: Vec<GameResult> = games
            .iter()
            .enumerate()
            .map(|(idx, game)| {
                info!("  Analyzing game {}/{}: {}", idx + 1, games.len(), game.matchup);
                self.analyze_with_stats(game, team_stats)
            })
            .collect();

        let unavailable = results.iter().filter(|r| !r.is_graded()).count();
        if unavailable > 0 {
            warn!("  → {} of {} games had no usable data", unavailable, results.len());
        }

        info!("=== Analysis Complete ===");
        results
    }

    pub fn analyze_game(&self, game: &GameInfo) -> GameResult {
        let team_stats = self.load_team_stats();
        self.analyze_with_stats(game, &team_stats)
    }

    /// Fetch everything one game needs; `None` when there is no play-by-play.
    pub fn load_game_data(&self, game: &GameInfo, team_stats: &[TeamGameStat]) -> Option<GameData> {
        let events = self.load_play_by_play(&game.game_id)?;

        Some(GameData {
            events,
            team_stats: rows_for_game(team_stats, &game.game_id),
            player_lines: self.load_box_score(&game.game_id),
        })
    }

    pub fn load_team_stats(&self) -> Vec<TeamGameStat> {
        self.source.team_stats().unwrap_or_else(|e| {
            warn!("Failed to load team stats, shooting scores will be 0: {:#}", e);
            Vec::new()
        })
    }

    fn analyze_with_stats(&self, game: &GameInfo, team_stats: &[TeamGameStat]) -> GameResult {
        match self.load_game_data(game, team_stats) {
            Some(data) => score_game(game, &data, self.weights),
            None => GameResult::unavailable(game),
        }
    }

    fn load_play_by_play(&self, game_id: &str) -> Option<Vec<PlayEvent>> {
        match self.source.play_by_play(game_id) {
            Ok(events) if !events.is_empty() => Some(events),
            Ok(_) => {
                warn!("No play-by-play data for game {}", game_id);
                None
            }
            Err(e) => {
                warn!("Failed to load play-by-play for game {}: {:#}", game_id, e);
                None
            }
        }
    }

    fn load_box_score(&self, game_id: &str) -> Vec<PlayerLine> {
        self.source.box_score(game_id).unwrap_or_else(|e| {
            warn!("Failed to load box score for game {}: {:#}", game_id, e);
            Vec::new()
        })
    }
}

fn rows_for_game(team_stats: &[TeamGameStat], game_id: &str) -> Vec<TeamGameStat> {
    team_stats
        .iter()
        .filter(|row| row.game_id == game_id)
        .cloned()
        .collect()
}

/// Score one game from already loaded data.
pub fn score_game(game: &GameInfo, data: &GameData, weights: &WeightConfig) -> GameResult {
    let periods = data.period_count();
    let lead = score_lead_changes(&data.events, weights.lead_change);
    let buzzer = score_buzzer_beater(&data.events, weights.buzzer_beater);
    let shooting = score_shooting(&data.team_stats, &game.game_id, weights.shooting_pct);
    let margin_star = score_margin_and_star(
        &data.events,
        &data.team_stats,
        &data.player_lines,
        weights.margin,
        weights.star_performance,
    );

    let breakdown = ScoreBreakdown {
        period_scores: score_periods(&data.events, weights),
        extra_periods: extra_periods_score(periods, weights),
        lead_changes: lead.score,
        buzzer_beater: buzzer.score,
        shooting_pct: shooting.combined,
        star_performance: margin_star.star_score,
        margin: margin_star.margin_score,
    };

    let total_score = round_to_tenth(breakdown.total());
    debug!(
        "Game {} breakdown: {:?} (total {:.1})",
        game.game_id, breakdown, total_score
    );

    GameResult {
        game_id: game.game_id.clone(),
        date: game.date,
        matchup: game.matchup.clone(),
        breakdown: breakdown.rounded(),
        total_score,
        grade: Grade::from_score(total_score),
        average_margin: round_to_tenth(margin_star.average_margin),
        metrics: GameMetrics {
            periods,
            lead_changes: lead.lead_changes,
            buzzer_beater: buzzer.buzzer_beater,
            final_margin: buzzer.final_margin,
            fg_pct_score: shooting.fg_pct_score,
            fg3_pct_score: shooting.fg3_pct_score,
            max_points: margin_star.max_points,
        },
    }
}

/// Closeness of the regulation periods that have plays, each with its pooled weight.
fn score_periods(events: &[PlayEvent], weights: &WeightConfig) -> f64 {
    (1..=REGULATION_PERIODS)
        .filter_map(|period| {
            let weight = weights.period_weight(period)?;
            let period_events: Vec<&PlayEvent> =
                events.iter().filter(|e| e.period == period).collect();
            if period_events.is_empty() {
                return None;
            }
            Some(score_period(period_events, weight).score)
        })
        .sum()
}

fn extra_periods_score(periods: u8, weights: &WeightConfig) -> f64 {
    if periods > REGULATION_PERIODS {
        full_points(weights.extra_period)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventKind, GameScore, ScoreMargin};
    use crate::source::MemorySource;
    use anyhow::{anyhow, Result};
    use std::cell::Cell;

    fn play(period: u8, clock: &str, kind: EventKind, away: u32, home: u32) -> PlayEvent {
        PlayEvent {
            period,
            kind,
            margin: ScoreMargin::from_value(home as i32 - away as i32),
            clock: clock.to_string(),
            score: Some(GameScore { away, home }),
        }
    }

    /// Tight four-quarter game decided at the buzzer.
    fn close_game() -> Vec<PlayEvent> {
        let mut events = Vec::new();
        for period in 1..=4u8 {
            let base = u32::from(period - 1) * 25;
            events.push(play(period, "11:00", EventKind::FieldGoalMade, base + 2, base));
            events.push(play(period, "8:00", EventKind::FieldGoalMade, base + 2, base + 3));
            events.push(play(period, "6:00", EventKind::FieldGoalMade, base + 5, base + 3));
            events.push(play(period, "3:00", EventKind::FieldGoalMade, base + 5, base + 6));
        }
        events.push(play(4, "0:01", EventKind::FieldGoalMade, 80, 82));
        events
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_score_game_close_game() {
        let game = GameInfo::new("g1", None, "AAA @ BBB");
        let data = GameData {
            events: close_game(),
            team_stats: vec![TeamGameStat {
                game_id: "g1".to_string(),
                fg_pct: Some(0.52),
                fg3_pct: Some(0.30),
                ..Default::default()
            }],
            player_lines: vec![PlayerLine {
                game_id: "g1".to_string(),
                points: 35,
                ..Default::default()
            }],
        };
        let weights = WeightConfig::default();

        let result = score_game(&game, &data, &weights);

        assert_eq!(result.metrics.periods, 4);
        assert_eq!(result.metrics.lead_changes, 15);
        assert!(approx_eq(result.breakdown.period_scores, 50.0));
        assert_eq!(result.breakdown.extra_periods, 0.0);
        assert!(approx_eq(result.breakdown.lead_changes, 5.0));
        assert_eq!(result.breakdown.buzzer_beater, 0.0);
        assert!(approx_eq(result.breakdown.shooting_pct, 5.0));
        assert!(approx_eq(result.breakdown.star_performance, 10.0));
        assert!(approx_eq(result.breakdown.margin, 25.0));
        assert!(approx_eq(result.total_score, 95.0));
        assert_eq!(result.grade, Grade::APlus);
        assert!(result.metrics.buzzer_beater);
    }

    #[test]
    fn test_grade_follows_rounded_total() {
        // 90 from the close game plus 2.96 shooting points
        let data = GameData {
            events: close_game(),
            team_stats: vec![TeamGameStat {
                game_id: "g1".to_string(),
                fg_pct: Some(0.4592),
                fg3_pct: Some(0.30),
                ..Default::default()
            }],
            player_lines: vec![PlayerLine {
                game_id: "g1".to_string(),
                points: 35,
                ..Default::default()
            }],
        };

        let result = score_game(&GameInfo::new("g1", None, ""), &data, &WeightConfig::default());

        assert!(approx_eq(result.total_score, 93.0));
        assert_eq!(result.grade, Grade::APlus);
        assert_eq!(result.grade, Grade::from_score(result.total_score));
    }

    #[test]
    fn test_overtime_earns_extra_period_weight() {
        let mut events = close_game();
        events.push(play(5, "4:00", EventKind::FieldGoalMade, 84, 82));
        let data = GameData {
            events,
            ..Default::default()
        };

        let result = score_game(&GameInfo::default(), &data, &WeightConfig::default());

        assert_eq!(result.metrics.periods, 5);
        assert!(approx_eq(result.breakdown.extra_periods, 5.0));
    }

    #[test]
    fn test_missing_tables_only_zero_their_components() {
        let data = GameData {
            events: close_game(),
            ..Default::default()
        };

        let game = GameInfo::new("g1", None, "AAA @ BBB");
        let result = score_game(&game, &data, &WeightConfig::default());

        assert_eq!(result.breakdown.shooting_pct, 0.0);
        assert_eq!(result.breakdown.star_performance, 0.0);
        assert!(result.breakdown.period_scores > 0.0);
        assert!(result.is_graded());
    }

    #[test]
    fn test_total_score_stays_within_bounds() {
        let weights = WeightConfig {
            buzzer_beater: 0.05,
            margin: 0.20,
            ..Default::default()
        };
        let mut events = close_game();
        events.push(play(5, "0:00", EventKind::FreeThrow, 84, 84));
        let data = GameData {
            events,
            team_stats: vec![TeamGameStat {
                game_id: "g1".to_string(),
                fg_pct: Some(0.9),
                fg3_pct: Some(0.9),
                ..Default::default()
            }],
            player_lines: vec![PlayerLine {
                points: 81,
                ..Default::default()
            }],
        };

        let result = score_game(&GameInfo::new("g1", None, ""), &data, &weights);

        assert!(result.total_score <= 100.0);
        assert!(result.total_score >= 0.0);
        for (component, value) in result.breakdown.iter() {
            assert!(value >= 0.0, "{} is negative", component.label());
        }
    }

    #[test]
    fn test_analyzer_marks_games_without_data_unavailable() {
        let source = MemorySource::new().with_play_by_play("g1", close_game());
        let weights = WeightConfig::default();
        let analyzer = GameAnalyzer::new(&weights, &source);
        let games = vec![
            GameInfo::new("g1", None, "AAA @ BBB"),
            GameInfo::new("g2", None, "CCC @ DDD"),
        ];

        let results = analyzer.analyze_games(&games);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].game_id, "g1");
        assert!(results[0].is_graded());
        assert_eq!(results[1].game_id, "g2");
        assert_eq!(results[1].grade, Grade::NotAvailable);
        assert_eq!(results[1].total_score, 0.0);
    }

    struct CountingSource {
        inner: MemorySource,
        team_stat_loads: Cell<usize>,
    }

    impl GameDataSource for CountingSource {
        fn team_stats(&self) -> Result<Vec<TeamGameStat>> {
            self.team_stat_loads.set(self.team_stat_loads.get() + 1);
            self.inner.team_stats()
        }

        fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>> {
            self.inner.play_by_play(game_id)
        }

        fn box_score(&self, game_id: &str) -> Result<Vec<PlayerLine>> {
            self.inner.box_score(game_id)
        }
    }

    #[test]
    fn test_preloaded_team_stats_are_not_reloaded() {
        let rows = vec![TeamGameStat {
            game_id: "g1".to_string(),
            matchup: "AAA @ BBB".to_string(),
            fg_pct: Some(0.5),
            ..Default::default()
        }];
        let source = CountingSource {
            inner: MemorySource::new()
                .with_team_stats(rows)
                .with_play_by_play("g1", close_game()),
            team_stat_loads: Cell::new(0),
        };
        let weights = WeightConfig::default();
        let analyzer = GameAnalyzer::new(&weights, &source);

        let team_stats = analyzer.load_team_stats();
        let results = analyzer.analyze_games_with(&[GameInfo::from(&team_stats[0])], &team_stats);

        assert_eq!(source.team_stat_loads.get(), 1);
        assert!(approx_eq(results[0].breakdown.shooting_pct, 5.0));
    }

    struct FailingSource;

    impl GameDataSource for FailingSource {
        fn team_stats(&self) -> Result<Vec<TeamGameStat>> {
            Err(anyhow!("stats provider unreachable"))
        }

        fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>> {
            if game_id == "ok" {
                Ok(close_game())
            } else {
                Err(anyhow!("timeout"))
            }
        }

        fn box_score(&self, _game_id: &str) -> Result<Vec<PlayerLine>> {
            Err(anyhow!("timeout"))
        }
    }

    #[test]
    fn test_source_failures_degrade_instead_of_failing() {
        let weights = WeightConfig::default();
        let analyzer = GameAnalyzer::new(&weights, &FailingSource);

        let scored = analyzer.analyze_game(&GameInfo::new("ok", None, "AAA @ BBB"));
        let failed = analyzer.analyze_game(&GameInfo::new("bad", None, "CCC @ DDD"));

        assert!(scored.is_graded());
        assert_eq!(scored.breakdown.shooting_pct, 0.0);
        assert_eq!(scored.breakdown.star_performance, 0.0);
        assert_eq!(failed.grade, Grade::NotAvailable);
    }
}
