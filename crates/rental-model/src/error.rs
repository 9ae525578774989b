use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown variable: {0}")]
    UnknownVariable(String),
    #[error("unknown city: {0}")]
    UnknownCity(String),
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("invalid price range '{0}' (expected LO..HI)")]
    InvalidPriceRange(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
