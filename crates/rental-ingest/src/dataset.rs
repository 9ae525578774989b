//! In-memory city datasets.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, Column, DataFrame};
use rental_model::City;

use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_f64, any_to_label};

/// One city's listings. Row order is the only identity.
#[derive(Debug, Clone)]
pub struct CityDataset {
    pub city: City,
    pub frame: DataFrame,
}

impl CityDataset {
    pub fn new(city: City, frame: DataFrame) -> Self {
        Self { city, frame }
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.frame
            .column(name)
            .map_err(|_| IngestError::ColumnNotFound {
                city: self.city,
                column: name.to_string(),
            })
    }

    /// Values of `name` as numbers; unparsable cells become `None`.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.column(name)?;
        Ok(cells(column).map(any_to_f64).collect())
    }

    /// Values of `name` as display labels; nulls become `None`.
    pub fn label_values(&self, name: &str) -> Result<Vec<Option<String>>> {
        let column = self.column(name)?;
        Ok(cells(column).map(any_to_label).collect())
    }
}

fn cells(column: &Column) -> impl Iterator<Item = AnyValue<'_>> {
    (0..column.len()).map(move |idx| column.get(idx).unwrap_or(AnyValue::Null))
}

/// All four city datasets, iterated in display order.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    by_city: BTreeMap<City, CityDataset>,
}

impl Datasets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dataset: CityDataset) {
        self.by_city.insert(dataset.city, dataset);
    }

    pub fn get(&self, city: City) -> Option<&CityDataset> {
        self.by_city.get(&city)
    }

    /// Datasets in [`City::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &CityDataset> {
        City::ALL.iter().filter_map(|city| self.by_city.get(city))
    }

    pub fn len(&self) -> usize {
        self.by_city.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_city.is_empty()
    }
}
