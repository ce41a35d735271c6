use log::debug;

/// Seconds left in a period for a "M:SS" game clock.
///
/// Seconds may be fractional ("0:04.3"). Empty or malformed clocks count as
/// 0 seconds remaining, i.e. the buzzer.
pub fn parse_clock(clock: &str) -> f64 {
    parse_minutes_seconds(clock).unwrap_or_else(|| {
        if !clock.trim().is_empty() {
            debug!("Unparsable period clock {:?}, treating as 0:00", clock);
        }
        0.0
    })
}

fn parse_minutes_seconds(clock: &str) -> Option<f64> {
    let (minutes, seconds) = clock.trim().split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;

    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }

    Some(f64::from(minutes) * 60.0 + seconds)
}
