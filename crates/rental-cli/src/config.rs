//! Optional TOML configuration file.
//!
//! ```toml
//! data_dir = "data"
//! output_dir = "dashboard"
//!
//! [files]
//! berlin = "listings_berlin_2024.csv"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rental_ingest::DataSources;
use rental_model::City;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Per-city file names (relative to `data_dir`) or paths, keyed by any
    /// spelling `City` parses.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("dashboard"),
            files: BTreeMap::new(),
        }
    }
}

impl DashboardConfig {
    /// Reads `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Applies command-line directory overrides.
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// File locations for every city.
    pub fn sources(&self) -> Result<DataSources> {
        let mut sources = DataSources::in_dir(&self.data_dir);
        for (name, file) in &self.files {
            let city: City = name
                .parse()
                .with_context(|| format!("config [files] key {name:?}"))?;
            sources = sources.with_file(city, self.data_dir.join(file));
        }
        Ok(sources)
    }
}
