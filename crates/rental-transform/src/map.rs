//! Geographic price view for one city.

use std::fmt;

use rental_ingest::CityDataset;
use rental_model::{City, LATITUDE_COLUMN, LONGITUDE_COLUMN, PRICE_MXN_COLUMN, PriceRange};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

pub const MAP_ZOOM: f64 = 11.0;
pub const MAP_PITCH: f64 = 45.0;
pub const POINT_RADIUS: f64 = 200.0;
pub const TOOLTIP_TEMPLATE: &str = "Price: {price_mxn} MXN";

/// A user-visible message shown in place of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notice {
    /// The city has no row with coordinates and a price.
    NoGeoData(City),
    /// The price range filter left nothing to draw.
    NoListingsInRange { city: City, range: PriceRange },
    /// A binary pie has no rows for this city.
    NoRows(City),
}

impl Notice {
    pub fn city(&self) -> City {
        match self {
            Notice::NoGeoData(city) | Notice::NoRows(city) => *city,
            Notice::NoListingsInRange { city, .. } => *city,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoGeoData(city) => write!(f, "No geographic data available for {city}."),
            Notice::NoListingsInRange { city, range } => {
                write!(f, "No listings in {city} within {range} MXN.")
            }
            Notice::NoRows(city) => write!(f, "No listings to chart for {city}."),
        }
    }
}

/// Slider bounds for the price range, in whole pesos.
///
/// Rounded outward so the cheapest and most expensive listings stay
/// selectable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    pub fn full_range(self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub price_mxn: f64,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub city: City,
    pub range: PriceRange,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub radius: f64,
    pub points: Vec<MapPoint>,
}

impl MapView {
    pub fn tooltip(point: &MapPoint) -> String {
        TOOLTIP_TEMPLATE.replace("{price_mxn}", &point.price_mxn.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MapOutcome {
    Rendered(MapView),
    Notice(Notice),
}

/// `(latitude, longitude, price_mxn)` for rows where all three are present.
pub fn geolocated_prices(dataset: &CityDataset) -> Result<Vec<(f64, f64, f64)>> {
    let latitudes = dataset.numeric_values(LATITUDE_COLUMN)?;
    let longitudes = dataset.numeric_values(LONGITUDE_COLUMN)?;
    let prices = dataset.numeric_values(PRICE_MXN_COLUMN)?;
    Ok(latitudes
        .into_iter()
        .zip(longitudes)
        .zip(prices)
        .filter_map(|((lat, lon), price)| Some((lat?, lon?, price?)))
        .collect())
}

/// Slider bounds over geolocated rows, `None` when there are none.
pub fn price_bounds(rows: &[(f64, f64, f64)]) -> Option<PriceBounds> {
    let (min, max) = rows.iter().fold(None, |acc: Option<(f64, f64)>, (_, _, p)| {
        Some(match acc {
            None => (*p, *p),
            Some((lo, hi)) => (lo.min(*p), hi.max(*p)),
        })
    })?;
    Some(PriceBounds {
        min: min.floor(),
        max: max.ceil(),
    })
}

/// Green channel for `price`: 255 at zero, falling linearly to 0 at `max`.
pub fn price_color(price: f64, max: f64) -> [u8; 3] {
    let scaled = (price / max * 255.0) as i64;
    let green = (255 - scaled).clamp(0, 255) as u8;
    [255, green, 0]
}

/// Builds the map for `dataset` filtered to `range`.
///
/// `range = None` uses the full slider bounds.
pub fn build_map(dataset: &CityDataset, range: Option<PriceRange>) -> Result<MapOutcome> {
    let city = dataset.city;
    let rows = geolocated_prices(dataset)?;
    let Some(bounds) = price_bounds(&rows) else {
        return Ok(MapOutcome::Notice(Notice::NoGeoData(city)));
    };
    let range = range.unwrap_or_else(|| bounds.full_range());
    let filtered: Vec<(f64, f64, f64)> = rows
        .into_iter()
        .filter(|(_, _, price)| range.contains(*price))
        .collect();
    if filtered.is_empty() {
        return Ok(MapOutcome::Notice(Notice::NoListingsInRange { city, range }));
    }
    let max_price = filtered
        .iter()
        .map(|(_, _, price)| *price)
        .fold(f64::NEG_INFINITY, f64::max);
    let count = filtered.len() as f64;
    let center_latitude = filtered.iter().map(|(lat, _, _)| lat).sum::<f64>() / count;
    let center_longitude = filtered.iter().map(|(_, lon, _)| lon).sum::<f64>() / count;
    let points: Vec<MapPoint> = filtered
        .into_iter()
        .map(|(latitude, longitude, price_mxn)| MapPoint {
            latitude,
            longitude,
            price_mxn,
            color: price_color(price_mxn, max_price),
        })
        .collect();
    debug!(city = %city, points = points.len(), %range, "map filtered");
    Ok(MapOutcome::Rendered(MapView {
        city,
        range,
        center_latitude,
        center_longitude,
        zoom: MAP_ZOOM,
        pitch: MAP_PITCH,
        radius: POINT_RADIUS,
        points,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_runs_from_yellow_to_red() {
        assert_eq!(price_color(0.0, 1000.0), [255, 255, 0]);
        assert_eq!(price_color(500.0, 1000.0), [255, 128, 0]);
        assert_eq!(price_color(1000.0, 1000.0), [255, 0, 0]);
    }

    #[test]
    fn bounds_round_outward() {
        let rows = [(0.0, 0.0, 99.5), (0.0, 0.0, 1500.25)];
        assert_eq!(
            price_bounds(&rows),
            Some(PriceBounds {
                min: 99.0,
                max: 1501.0
            })
        );
        assert_eq!(price_bounds(&[]), None);
    }

    #[test]
    fn tooltip_shows_price() {
        let point = MapPoint {
            latitude: 0.0,
            longitude: 0.0,
            price_mxn: 900.5,
            color: [255, 0, 0],
        };
        assert_eq!(MapView::tooltip(&point), "Price: 900.5 MXN");
    }
}
