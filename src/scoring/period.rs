use super::curve::{falling, full_points, mean};
use crate::domain::PlayEvent;

const FULL_SCORE_MARGIN: f64 = 7.0;
const ZERO_SCORE_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodScore {
    pub average_margin: f64,
    pub score: f64,
}

/// Score how close one period was.
///
/// The mean absolute margin is taken over plays with a recorded running
/// score; a tie or an unrecorded margin on such a play counts as 0. A period
/// without any scored plays has a mean of 0 and therefore earns the full
/// weight.
pub fn score_period<'a, I>(events: I, weight: f64) -> PeriodScore
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let average_margin = average_period_margin(events);
    PeriodScore {
        average_margin,
        score: closeness_score(average_margin, weight),
    }
}

pub fn average_period_margin<'a, I>(events: I) -> f64
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    mean(
        events
            .into_iter()
            .filter(|e| e.score.is_some())
            .map(|e| f64::from(e.margin.value().unwrap_or(0).unsigned_abs())),
    )
}

pub fn closeness_score(average_margin: f64, weight: f64) -> f64 {
    falling(average_margin, FULL_SCORE_MARGIN, ZERO_SCORE_MARGIN, full_points(weight))
}
