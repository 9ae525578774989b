pub mod city;
pub mod error;
pub mod selection;
pub mod variable;

pub use city::{City, Rgb};
pub use error::{ModelError, Result};
pub use selection::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, HEIGHT_BOUNDS, PriceRange, Selection, WIDTH_BOUNDS,
};
pub use variable::{
    LATITUDE_COLUMN, LONGITUDE_COLUMN, PRICE_MXN_COLUMN, RAW_PRICE_COLUMN, Variable, VariableKind,
};
