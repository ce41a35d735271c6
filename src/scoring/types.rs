use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::curve::round_to_tenth;
use super::grade::Grade;
use crate::domain::GameInfo;

/// Named parts of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    PeriodScores,
    ExtraPeriods,
    LeadChanges,
    BuzzerBeater,
    ShootingPct,
    StarPerformance,
    Margin,
}

impl Component {
    pub const ALL: [Component; 7] = [
        Component::PeriodScores,
        Component::ExtraPeriods,
        Component::LeadChanges,
        Component::BuzzerBeater,
        Component::ShootingPct,
        Component::StarPerformance,
        Component::Margin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Component::PeriodScores => "Period Scores",
            Component::ExtraPeriods => "Extra Periods",
            Component::LeadChanges => "Lead Changes",
            Component::BuzzerBeater => "Buzzer Beater",
            Component::ShootingPct => "Shooting%",
            Component::StarPerformance => "Star Performance",
            Component::Margin => "Margin",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "Period Scores")]
    pub period_scores: f64,
    #[serde(rename = "Extra Periods")]
    pub extra_periods: f64,
    #[serde(rename = "Lead Changes")]
    pub lead_changes: f64,
    #[serde(rename = "Buzzer Beater")]
    pub buzzer_beater: f64,
    #[serde(rename = "Shooting%")]
    pub shooting_pct: f64,
    #[serde(rename = "Star Performance")]
    pub star_performance: f64,
    #[serde(rename = "Margin")]
    pub margin: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::PeriodScores => self.period_scores,
            Component::ExtraPeriods => self.extra_periods,
            Component::LeadChanges => self.lead_changes,
            Component::BuzzerBeater => self.buzzer_beater,
            Component::ShootingPct => self.shooting_pct,
            Component::StarPerformance => self.star_performance,
            Component::Margin => self.margin,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    pub fn rounded(&self) -> Self {
        Self {
            period_scores: round_to_tenth(self.period_scores),
            extra_periods: round_to_tenth(self.extra_periods),
            lead_changes: round_to_tenth(self.lead_changes),
            buzzer_beater: round_to_tenth(self.buzzer_beater),
            shooting_pct: round_to_tenth(self.shooting_pct),
            star_performance: round_to_tenth(self.star_performance),
            margin: round_to_tenth(self.margin),
        }
    }
}

/// Raw measurements behind the sub-scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMetrics {
    pub periods: u8,
    pub lead_changes: u32,
    pub buzzer_beater: bool,
    pub final_margin: i32,
    pub fg_pct_score: f64,
    pub fg3_pct_score: f64,
    pub max_points: u32,
}

/// Scored game, ready for ranking or display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_id: String,
    pub date: Option<NaiveDate>,
    pub matchup: String,
    pub breakdown: ScoreBreakdown,
    pub total_score: f64,
    pub grade: Grade,
    /// Closing-stretch margin, kept for display next to the total
    pub average_margin: f64,
    pub metrics: GameMetrics,
}

impl GameResult {
    /// Placeholder for a game without usable play-by-play.
    pub fn unavailable(info: &GameInfo) -> Self {
        Self {
            game_id: info.game_id.clone(),
            date: info.date,
            matchup: info.matchup.clone(),
            breakdown: ScoreBreakdown::default(),
            total_score: 0.0,
            grade: Grade::NotAvailable,
            average_margin: 0.0,
            metrics: GameMetrics::default(),
        }
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_graded()
    }
}
