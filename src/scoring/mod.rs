pub mod buzzer_beater;
pub mod curve;
pub mod grade;
pub mod lead_changes;
pub mod margin_star;
pub mod period;
pub mod shooting;
pub mod time_code;
pub mod types;

pub use buzzer_beater::{score_buzzer_beater, BuzzerBeaterScore};
pub use grade::Grade;
pub use lead_changes::{score_lead_changes, LeadChangeScore};
pub use margin_star::{score_margin_and_star, MarginStarScore};
pub use period::{score_period, PeriodScore};
pub use shooting::{score_shooting, ShootingScore};
pub use time_code::parse_clock;
pub use types::{Component, GameMetrics, GameResult, ScoreBreakdown};
