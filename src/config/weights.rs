use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::{parse_context, ConfigError};

const SUM_TOLERANCE: f64 = 1e-6;

/// Weights for every score component.
///
/// Regulation period weights are scaled by `max_period_pool` before use, so
/// the pooled period weights plus the six scalar weights must add up to 1.0
/// for the total score to top out at 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub period_weights: [f64; 4],
    pub max_period_pool: f64,
    pub extra_period: f64,
    pub lead_change: f64,
    pub buzzer_beater: f64,
    pub shooting_pct: f64,
    pub star_performance: f64,
    pub margin: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            period_weights: [0.33, 0.33, 0.34, 0.0],
            max_period_pool: 0.50,
            extra_period: 0.05,
            lead_change: 0.05,
            buzzer_beater: 0.0,
            shooting_pct: 0.05,
            star_performance: 0.1,
            margin: 0.25,
        }
    }
}

impl WeightConfig {
    /// Load weights from a JSON file; missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read weights file {}", path.display()))?;
        let weights: WeightConfig =
            serde_json::from_str(&json).with_context(|| parse_context("weights file"))?;

        weights.validate()?;
        Ok(weights)
    }

    /// Pooled weight of a regulation period (1-4); overtime has none.
    pub fn period_weight(&self, period: u8) -> Option<f64> {
        let index = usize::from(period).checked_sub(1)?;
        self.period_weights
            .get(index)
            .map(|w| w * self.max_period_pool)
    }

    pub fn total(&self) -> f64 {
        let pooled: f64 = self.period_weights.iter().sum::<f64>() * self.max_period_pool;
        pooled + self.scalar_weights().iter().map(|(_, w)| w).sum::<f64>()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.named_weights() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        let total = self.total();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(total));
        }

        Ok(())
    }

    fn scalar_weights(&self) -> [(&'static str, f64); 6] {
        [
            ("extra_period", self.extra_period),
            ("lead_change", self.lead_change),
            ("buzzer_beater", self.buzzer_beater),
            ("shooting_pct", self.shooting_pct),
            ("star_performance", self.star_performance),
            ("margin", self.margin),
        ]
    }

    fn named_weights(&self) -> Vec<(&'static str, f64)> {
        let [p1, p2, p3, p4] = self.period_weights;
        let mut weights = vec![
            ("period_1", p1),
            ("period_2", p2),
            ("period_3", p3),
            ("period_4", p4),
            ("max_period_pool", self.max_period_pool),
        ];
        weights.extend(self.scalar_weights());
        weights
    }
}
