pub mod dataset;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod polars_utils;

pub use dataset::{CityDataset, Datasets};
pub use error::{IngestError, Result};
pub use loader::{DataSources, DatasetCache, load_datasets, read_city_csv};
pub use normalize::{normalize_prices, round2, to_mxn};
pub use polars_utils::{any_to_f64, any_to_label, format_numeric, parse_f64, parse_percent};
