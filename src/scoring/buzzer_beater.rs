use std::collections::BTreeSet;

use super::curve::full_points;
use crate::domain::PlayEvent;

/// Final seconds of a period that count as the clutch window
pub const CLUTCH_WINDOW_SECS: f64 = 24.0;

const CLOSE_FINISH_MARGIN: u32 = 3;
const NEAR_FINISH_MARGIN: u32 = 5;
const NEAR_FINISH_SHARE: f64 = 0.8;
const LOOSE_FINISH_SHARE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct BuzzerBeaterScore {
    pub buzzer_beater: bool,
    pub clutch_periods: Vec<u8>,
    pub final_margin: i32,
    pub score: f64,
}

impl BuzzerBeaterScore {
    fn none() -> Self {
        Self {
            buzzer_beater: false,
            clutch_periods: Vec::new(),
            final_margin: 0,
            score: 0.0,
        }
    }
}

pub fn score_buzzer_beater(events: &[PlayEvent], weight: f64) -> BuzzerBeaterScore {
    let clutch_periods = clutch_periods(events);
    if clutch_periods.is_empty() {
        return BuzzerBeaterScore::none();
    }

    let final_margin = final_margin(events);
    BuzzerBeaterScore {
        buzzer_beater: true,
        clutch_periods,
        final_margin,
        score: finish_score(final_margin, weight),
    }
}

/// Periods with a made shot or free throw inside the clutch window.
pub fn clutch_periods(events: &[PlayEvent]) -> Vec<u8> {
    events
        .iter()
        .filter(|e| is_clutch_score(e))
        .map(|e| e.period)
        .collect::<BTreeSet<u8>>()
        .into_iter()
        .collect()
}

fn is_clutch_score(event: &PlayEvent) -> bool {
    event.kind.is_scoring() && event.seconds_remaining() <= CLUTCH_WINDOW_SECS
}

/// Last recorded margin of the game, a tie counting as 0.
pub fn final_margin(events: &[PlayEvent]) -> i32 {
    events
        .iter()
        .rev()
        .find_map(|e| e.margin.value())
        .unwrap_or(0)
}

fn finish_score(final_margin: i32, weight: f64) -> f64 {
    let full = full_points(weight);
    match final_margin.unsigned_abs() {
        m if m <= CLOSE_FINISH_MARGIN => full,
        m if m <= NEAR_FINISH_MARGIN => full * NEAR_FINISH_SHARE,
        _ => full * LOOSE_FINISH_SHARE,
    }
}
