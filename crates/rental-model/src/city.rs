//! The four cities the dashboard compares.
//!
//! Each city carries fixed lookup data: the exchange rate from its local
//! currency to Mexican pesos, its chart color and the file name of its
//! cleaned listing dataset. None of it changes at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// An RGB color used to draw a city's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Light gray used for the complement slice of binary pies.
    pub const LIGHT_GRAY: Rgb = Rgb(211, 211, 211);

    /// CSS hex notation (`#rrggbb`).
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A city with a listings dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    RioDeJaneiro,
    Naples,
    Berlin,
    Mexico,
}

impl City {
    /// All cities in display order.
    pub const ALL: [City; 4] = [City::RioDeJaneiro, City::Naples, City::Berlin, City::Mexico];

    /// Display name, as used in chart titles and file lookups.
    pub fn name(self) -> &'static str {
        match self {
            City::RioDeJaneiro => "Rio de Janeiro",
            City::Naples => "Naples",
            City::Berlin => "Berlin",
            City::Mexico => "Mexico",
        }
    }

    /// Multiplier converting the city's local currency to MXN.
    ///
    /// BRL for Rio de Janeiro, EUR for Naples and Berlin; Mexico is the
    /// identity.
    pub fn exchange_rate(self) -> f64 {
        match self {
            City::RioDeJaneiro => 3.5,
            City::Naples => 18.0,
            City::Berlin => 18.0,
            City::Mexico => 1.0,
        }
    }

    /// Series color (green, gold, black, red).
    pub fn color(self) -> Rgb {
        match self {
            City::RioDeJaneiro => Rgb(0, 128, 0),
            City::Naples => Rgb(255, 215, 0),
            City::Berlin => Rgb(0, 0, 0),
            City::Mexico => Rgb(255, 0, 0),
        }
    }

    /// File name of the cleaned dataset, relative to the data directory.
    pub fn default_file_name(self) -> &'static str {
        match self {
            City::RioDeJaneiro => "Rio de Janeiro sin atipicos.csv",
            City::Naples => "Datos_limpios_Naples.csv",
            City::Berlin => "Datos_limpios_Berlin.csv",
            City::Mexico => "México sin atipicos.csv",
        }
    }

    /// Lowercase identifier safe for file names (`rio_de_janeiro`).
    pub fn slug(self) -> &'static str {
        match self {
            City::RioDeJaneiro => "rio_de_janeiro",
            City::Naples => "naples",
            City::Berlin => "berlin",
            City::Mexico => "mexico",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = ModelError;

    /// Accepts the display name or the slug, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "rio de janeiro" | "rio" => Ok(City::RioDeJaneiro),
            "naples" => Ok(City::Naples),
            "berlin" => Ok(City::Berlin),
            "mexico" | "méxico" => Ok(City::Mexico),
            _ => Err(ModelError::UnknownCity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_slugs() {
        for city in City::ALL {
            assert_eq!(city.name().parse::<City>(), Ok(city));
            assert_eq!(city.slug().parse::<City>(), Ok(city));
        }
        assert_eq!("MÉXICO".parse::<City>(), Ok(City::Mexico));
        assert!("Paris".parse::<City>().is_err());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(City::Naples.color().hex(), "#ffd700");
        assert_eq!(Rgb::LIGHT_GRAY.hex(), "#d3d3d3");
    }
}
