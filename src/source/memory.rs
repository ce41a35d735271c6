use std::collections::HashMap;

use anyhow::Result;

use super::GameDataSource;
use crate::domain::{PlayEvent, PlayerLine, TeamGameStat};

/// Game tables held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    team_stats: Vec<TeamGameStat>,
    plays: HashMap<String, Vec<PlayEvent>>,
    box_scores: HashMap<String, Vec<PlayerLine>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_team_stats(mut self, rows: Vec<TeamGameStat>) -> Self {
        self.team_stats.extend(rows);
        self
    }

    pub fn with_play_by_play(mut self, game_id: impl Into<String>, events: Vec<PlayEvent>) -> Self {
        self.plays.insert(game_id.into(), events);
        self
    }

    pub fn with_box_score(mut self, game_id: impl Into<String>, lines: Vec<PlayerLine>) -> Self {
        self.box_scores.insert(game_id.into(), lines);
        self
    }
}

impl GameDataSource for MemorySource {
    fn team_stats(&self) -> Result<Vec<TeamGameStat>> {
        Ok(self.team_stats.clone())
    }

    fn play_by_play(&self, game_id: &str) -> Result<Vec<PlayEvent>> {
        Ok(self.plays.get(game_id).cloned().unwrap_or_default())
    }

    fn box_score(&self, game_id: &str) -> Result<Vec<PlayerLine>> {
        Ok(self.box_scores.get(game_id).cloned().unwrap_or_default())
    }
}
