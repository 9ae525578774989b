//! Dataset loading and the process-wide dataset cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

use polars::prelude::*;
use rental_model::City;
use tracing::{debug, info, info_span};

use crate::dataset::{CityDataset, Datasets};
use crate::error::{IngestError, Result};
use crate::normalize::normalize_prices;

/// Where each city's CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    files: BTreeMap<City, PathBuf>,
}

impl DataSources {
    /// Default file names resolved against `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        let files = City::ALL
            .iter()
            .map(|city| (*city, data_dir.join(city.default_file_name())))
            .collect();
        Self { files }
    }

    /// Override the file for one city.
    #[must_use]
    pub fn with_file(mut self, city: City, path: PathBuf) -> Self {
        self.files.insert(city, path);
        self
    }

    pub fn path(&self, city: City) -> &Path {
        // Both constructors populate every city.
        self.files
            .get(&city)
            .map_or_else(|| Path::new(city.default_file_name()), PathBuf::as_path)
    }
}

/// Reads one city's CSV into a DataFrame.
pub fn read_city_csv(city: City, path: &Path) -> Result<DataFrame> {
    let unavailable = |reason: String| IngestError::DataUnavailable {
        city,
        path: path.to_path_buf(),
        reason,
    };
    if !path.is_file() {
        return Err(unavailable("file not found".to_string()));
    }
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| unavailable(e.to_string()))?
        .finish()
        .map_err(|e| unavailable(e.to_string()))
}

/// Reads and normalizes all four datasets.
///
/// Fails on the first city whose file is missing, unparsable or lacks a
/// `price` column.
pub fn load_datasets(sources: &DataSources) -> Result<Datasets> {
    let span = info_span!("load_datasets");
    let _guard = span.enter();
    let start = Instant::now();
    let mut datasets = Datasets::new();
    for city in City::ALL {
        let path = sources.path(city);
        let frame = read_city_csv(city, path)?;
        debug!(
            city = %city,
            path = %path.display(),
            rows = frame.height(),
            columns = frame.width(),
            "read dataset"
        );
        let mut dataset = CityDataset::new(city, frame);
        normalize_prices(&mut dataset).map_err(|e| IngestError::DataUnavailable {
            city,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        datasets.insert(dataset);
    }
    info!(
        cities = datasets.len(),
        duration_ms = start.elapsed().as_millis(),
        "datasets loaded"
    );
    Ok(datasets)
}

/// Lazily loaded, read-only datasets.
///
/// The first successful [`DatasetCache::get`] reads the files; later calls
/// return the same value without touching storage. A failed load is not
/// remembered.
#[derive(Debug)]
pub struct DatasetCache {
    sources: DataSources,
    datasets: OnceLock<Datasets>,
}

impl DatasetCache {
    pub fn new(sources: DataSources) -> Self {
        Self {
            sources,
            datasets: OnceLock::new(),
        }
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    pub fn is_loaded(&self) -> bool {
        self.datasets.get().is_some()
    }

    pub fn get(&self) -> Result<&Datasets> {
        if let Some(datasets) = self.datasets.get() {
            debug!("dataset cache hit");
            return Ok(datasets);
        }
        let loaded = load_datasets(&self.sources)?;
        Ok(self.datasets.get_or_init(|| loaded))
    }
}
