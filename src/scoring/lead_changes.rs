use super::curve::{full_points, rising};
use crate::domain::PlayEvent;

const ZERO_SCORE_CHANGES: f64 = 5.0;
const FULL_SCORE_CHANGES: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadChangeScore {
    pub lead_changes: u32,
    pub score: f64,
}

pub fn score_lead_changes(events: &[PlayEvent], weight: f64) -> LeadChangeScore {
    let lead_changes = count_lead_changes(events);
    LeadChangeScore {
        lead_changes,
        score: lead_change_score(lead_changes, weight),
    }
}

/// Count sign flips of the margin in play order, skipping ties and plays
/// without a recorded margin.
pub fn count_lead_changes(events: &[PlayEvent]) -> u32 {
    let mut lead_changes = 0;
    let mut previous: Option<i32> = None;

    for lead in events.iter().filter_map(|e| e.margin.lead()) {
        if previous.is_some_and(|p| p.signum() != lead.signum()) {
            lead_changes += 1;
        }
        previous = Some(lead);
    }

    lead_changes
}

pub fn lead_change_score(lead_changes: u32, weight: f64) -> f64 {
    rising(
        f64::from(lead_changes),
        ZERO_SCORE_CHANGES,
        FULL_SCORE_CHANGES,
        full_points(weight),
    )
}
