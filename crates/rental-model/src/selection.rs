//! Transient control-panel state.
//!
//! A [`Selection`] is everything one interaction asks for. It is owned by
//! the front end and only read by the chart and table builders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::city::City;
use crate::error::{ModelError, Result};
use crate::variable::Variable;

/// Allowed chart width, in figure units.
pub const WIDTH_BOUNDS: RangeInclusive<u32> = 4..=20;
/// Allowed chart height, in figure units.
pub const HEIGHT_BOUNDS: RangeInclusive<u32> = 1..=15;
pub const DEFAULT_WIDTH: u32 = 10;
pub const DEFAULT_HEIGHT: u32 = 6;

/// Inclusive price interval in MXN used to filter the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lo: f64,
    pub hi: f64,
}

impl PriceRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Inclusive on both ends. Always false when `lo > hi`.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lo && price <= self.hi
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

impl FromStr for PriceRange {
    type Err = ModelError;

    /// Parses `LO..HI`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidPriceRange(s.to_string());
        let (lo, hi) = s.trim().split_once("..").ok_or_else(invalid)?;
        let lo = lo.trim().parse::<f64>().map_err(|_| invalid())?;
        let hi = hi.trim().parse::<f64>().map_err(|_| invalid())?;
        if !lo.is_finite() || !hi.is_finite() {
            return Err(invalid());
        }
        Ok(Self { lo, hi })
    }
}

/// One interaction's worth of control-panel values.
///
/// Deserialization goes through the same bounds checks as
/// [`Selection::set_width`] and [`Selection::set_height`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SelectionFields")]
pub struct Selection {
    pub variable: Variable,
    pub show_table: bool,
    width: u32,
    height: u32,
    pub map_city: City,
    /// `None` selects the map city's full observed range.
    pub price_range: Option<PriceRange>,
    pub table_city: City,
}

impl Selection {
    pub fn new(variable: Variable) -> Self {
        Self {
            variable,
            show_table: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            map_city: City::ALL[0],
            price_range: None,
            table_city: City::ALL[0],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, width: u32) -> Result<()> {
        self.width = check_bounds("width", width, &WIDTH_BOUNDS)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: u32) -> Result<()> {
        self.height = check_bounds("height", height, &HEIGHT_BOUNDS)?;
        Ok(())
    }

    #[must_use]
    pub fn with_show_table(mut self, show_table: bool) -> Self {
        self.show_table = show_table;
        self
    }

    #[must_use]
    pub fn with_map_city(mut self, city: City) -> Self {
        self.map_city = city;
        self
    }

    #[must_use]
    pub fn with_price_range(mut self, range: Option<PriceRange>) -> Self {
        self.price_range = range;
        self
    }

    #[must_use]
    pub fn with_table_city(mut self, city: City) -> Self {
        self.table_city = city;
        self
    }

    /// Select a different variable. The map city, price range and table
    /// city are kept, matching a sidebar whose other widgets stay put.
    pub fn select_variable(&mut self, variable: Variable) {
        self.variable = variable;
    }
}

#[derive(Deserialize)]
struct SelectionFields {
    variable: Variable,
    show_table: bool,
    width: u32,
    height: u32,
    map_city: City,
    price_range: Option<PriceRange>,
    table_city: City,
}

impl TryFrom<SelectionFields> for Selection {
    type Error = ModelError;

    fn try_from(fields: SelectionFields) -> Result<Self> {
        let mut selection = Selection::new(fields.variable)
            .with_show_table(fields.show_table)
            .with_map_city(fields.map_city)
            .with_price_range(fields.price_range)
            .with_table_city(fields.table_city);
        selection.set_width(fields.width)?;
        selection.set_height(fields.height)?;
        Ok(selection)
    }
}

fn check_bounds(name: &'static str, value: u32, bounds: &RangeInclusive<u32>) -> Result<u32> {
    if bounds.contains(&value) {
        Ok(value)
    } else {
        Err(ModelError::OutOfRange {
            name,
            value,
            min: *bounds.start(),
            max: *bounds.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let selection = Selection::new(Variable::Beds);
        assert_eq!(selection.width(), 10);
        assert_eq!(selection.height(), 6);
        assert!(!selection.show_table);
        assert_eq!(selection.map_city, City::RioDeJaneiro);
        assert_eq!(selection.table_city, City::RioDeJaneiro);
        assert!(selection.price_range.is_none());
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        let mut selection = Selection::new(Variable::Beds);
        assert!(selection.set_width(3).is_err());
        assert!(selection.set_width(21).is_err());
        assert!(selection.set_height(0).is_err());
        selection.set_width(20).unwrap();
        selection.set_height(1).unwrap();
        assert_eq!((selection.width(), selection.height()), (20, 1));
    }

    #[test]
    fn parses_price_range() {
        let range: PriceRange = "100..2500.5".parse().unwrap();
        assert_eq!(range, PriceRange::new(100.0, 2500.5));
        assert!(range.contains(100.0));
        assert!(range.contains(2500.5));
        assert!(!range.contains(2500.6));
        assert!("100-200".parse::<PriceRange>().is_err());
        assert!("a..b".parse::<PriceRange>().is_err());
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = PriceRange::new(500.0, 100.0);
        assert!(!range.contains(300.0));
        assert!(!range.contains(100.0));
    }
}
