//! Piecewise-linear scoring curves shared by the scorers.

/// 0 at or below `zero_at`, `full` at or above `full_at`, linear in between.
pub fn rising(value: f64, zero_at: f64, full_at: f64, full: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    if value >= full_at {
        full
    } else if value <= zero_at {
        0.0
    } else {
        full * (value - zero_at) / (full_at - zero_at)
    }
}

/// `full` at or below `full_at`, 0 at or above `zero_at`, linear in between.
pub fn falling(value: f64, full_at: f64, zero_at: f64, full: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    if value <= full_at {
        full
    } else if value >= zero_at {
        0.0
    } else {
        full * (zero_at - value) / (zero_at - full_at)
    }
}

/// Full points available for a component with the given weight.
pub fn full_points(weight: f64) -> f64 {
    weight * 100.0
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the values, 0 when there are none.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising() {
        assert_eq!(rising(0.3, 0.4, 0.5, 5.0), 0.0);
        assert_eq!(rising(0.6, 0.4, 0.5, 5.0), 5.0);
        assert!((rising(0.45, 0.4, 0.5, 5.0) - 2.5).abs() < 1e-9);
        assert_eq!(rising(f64::NAN, 0.4, 0.5, 5.0), 0.0);
    }

    #[test]
    fn test_falling() {
        assert_eq!(falling(3.0, 5.0, 15.0, 25.0), 25.0);
        assert_eq!(falling(15.0, 5.0, 15.0, 25.0), 0.0);
        assert!((falling(10.0, 5.0, 15.0, 25.0) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_round_and_mean() {
        assert_eq!(round_to_tenth(12.345), 12.3);
        assert_eq!(round_to_tenth(12.36), 12.4);
        assert_eq!(mean(Vec::new()), 0.0);
        assert_eq!(mean(vec![1.0, 2.0, 6.0]), 3.0);
    }
}
