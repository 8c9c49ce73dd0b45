//! Filter error types.

use thiserror::Error;

/// Errors raised by the strict constructors and configuration loading.
///
/// Decoding a query string never produces one of these; it falls back to
/// defaults instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Lower price bound above the upper one.
    #[error("Inverted price range: min {min} is greater than max {max}")]
    InvertedPriceRange { min: u32, max: u32 },

    /// Stock status name outside `all`, `in-stock`, `out-of-stock`.
    #[error("Unknown stock status: {0}")]
    UnknownStockStatus(String),

    /// Configuration values that cannot be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    ConfigIo(String),

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for FilterError {
    fn from(e: serde_json::Error) -> Self {
        FilterError::ConfigParse(e.to_string())
    }
}

impl From<toml::de::Error> for FilterError {
    fn from(e: toml::de::Error) -> Self {
        FilterError::ConfigParse(e.to_string())
    }
}
