use std::path::{Path, PathBuf};

use anyhow::Result;

use super::weights::WeightConfig;
use crate::domain::schedule::DEFAULT_MAX_GAMES;

pub const CACHE_DIR_ENV: &str = "NBA_RANKING_CACHE_DIR";
const DEFAULT_CACHE_DIR: &str = "cache";

pub struct SourceSettings {
    pub cache_dir: PathBuf,
    pub max_games: usize,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            cache_dir: std::env::var(CACHE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR)),
            max_games: DEFAULT_MAX_GAMES,
        }
    }
}

pub struct AppConfig {
    pub weights: WeightConfig,
    pub source: SourceSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            weights: WeightConfig::default(),
            source: SourceSettings::default(),
        }
    }

    /// Apply command-line overrides on top of the defaults.
    pub fn with_overrides(cache_dir: Option<&Path>, weights_file: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(dir) = cache_dir {
            config.source.cache_dir = dir.to_path_buf();
        }

        if let Some(path) = weights_file {
            config.weights = WeightConfig::from_file(path)?;
        }

        Ok(config)
    }

    pub fn with_max_games(mut self, max_games: Option<usize>) -> Self {
        if let Some(max_games) = max_games {
            self.source.max_games = max_games;
        }
        self
    }
}
