use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::cache_context;

/// Read-only view over the two-tier JSON cache written by the fetch layer
pub struct Cache {
    cache_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    /// Open a cache directory; it does not have to exist yet.
    pub fn open<P: AsRef<Path>>(cache_dir: P) -> Self {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        let parsed_dir = cache_dir.join("parsed");

        if !parsed_dir.is_dir() {
            info!("Cache directory {} has no parsed data", cache_dir.display());
        }

        Self {
            cache_dir,
            parsed_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.cache_dir
    }

    /// Load parsed data from cache, `None` when the key was never cached
    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_parsed_path(key);
        let data = self
            .read_json_opt(&file_path)
            .with_context(|| cache_context("read", key))?;

        if data.is_some() {
            debug!("Loaded parsed data from cache: {}", file_path.display());
        }
        Ok(data)
    }

    // --- Helper Methods ---

    fn build_parsed_path(&self, key: &str) -> PathBuf {
        self.parsed_dir.join(format!("{}.json", key))
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}
