//! Currency normalization to Mexican pesos.

use polars::prelude::{NamedFrom, Series};
use rental_model::{City, PRICE_MXN_COLUMN, RAW_PRICE_COLUMN};
use tracing::debug;

use crate::dataset::CityDataset;
use crate::error::Result;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts one raw price to MXN: `round(raw * rate, 2)`.
pub fn to_mxn(raw: Option<f64>, city: City) -> Option<f64> {
    raw.map(|value| round2(value * city.exchange_rate()))
}

/// Appends (or replaces) the `price_mxn` column of `dataset`.
///
/// Non-numeric raw prices become missing. Re-running with the same `price`
/// column yields the same values.
pub fn normalize_prices(dataset: &mut CityDataset) -> Result<()> {
    let raw = dataset.numeric_values(RAW_PRICE_COLUMN)?;
    let city = dataset.city;
    let converted: Vec<Option<f64>> = raw.iter().map(|value| to_mxn(*value, city)).collect();
    let missing = converted.iter().filter(|value| value.is_none()).count();
    debug!(
        city = %city,
        rate = city.exchange_rate(),
        rows = converted.len(),
        missing,
        "normalized prices"
    );
    dataset
        .frame
        .with_column(Series::new(PRICE_MXN_COLUMN.into(), converted))?;
    Ok(())
}
