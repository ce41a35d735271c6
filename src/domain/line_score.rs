use std::collections::BTreeMap;

use serde::Serialize;

use super::models::{GameScore, PlayEvent};

/// Points scored by each side in one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodLine {
    pub period: u8,
    pub away: u32,
    pub home: u32,
}

/// Per-period points derived from the running score.
///
/// A period without any recorded score keeps the previous cumulative score,
/// so it shows 0 points for both sides.
pub fn period_points(events: &[PlayEvent]) -> Vec<PeriodLine> {
    let closing = closing_scores(events);
    let mut previous = GameScore { away: 0, home: 0 };
    let mut lines = Vec::with_capacity(closing.len());

    for (period, score) in closing {
        let current = score.unwrap_or(previous);
        lines.push(PeriodLine {
            period,
            away: current.away.saturating_sub(previous.away),
            home: current.home.saturating_sub(previous.home),
        });
        previous = current;
    }

    lines
}

fn closing_scores(events: &[PlayEvent]) -> BTreeMap<u8, Option<GameScore>> {
    let mut closing: BTreeMap<u8, Option<GameScore>> = BTreeMap::new();
    for event in events {
        let entry = closing.entry(event.period).or_insert(None);
        if event.score.is_some() {
            *entry = event.score;
        }
    }
    closing
}
