//! Filter sidebar configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;
use crate::filter::{FilterOptions, FilterReducer, PriceRange, UrlCodec};

/// Slider step used by the price slider, in currency units.
pub const DEFAULT_PRICE_STEP: u32 = 50;

/// Configuration for the filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Full price range; also the inactive value of the price dimension.
    #[serde(default)]
    pub price_bounds: PriceRange,

    /// Price slider step (default: 50).
    #[serde(default = "default_price_step")]
    pub price_step: u32,

    /// Whether resetting the filters shows a notification.
    #[serde(default = "default_true")]
    pub notify_on_reset: bool,
}

fn default_price_step() -> u32 {
    DEFAULT_PRICE_STEP
}

fn default_true() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_bounds: PriceRange::DEFAULT,
            price_step: DEFAULT_PRICE_STEP,
            notify_on_reset: true,
        }
    }
}

impl FilterConfig {
    /// Load config from a file; `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::ConfigIo(format!("{}: {}", path.display(), e)))?;

        let config: FilterConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded filter configuration");
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, FilterError> {
        let config: FilterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the sidebar cannot use.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.price_step == 0 {
            return Err(FilterError::InvalidConfig("price_step must be positive".to_string()));
        }
        if self.price_bounds.min() == self.price_bounds.max() {
            return Err(FilterError::InvalidConfig(format!(
                "price_bounds must span a range, got {}",
                self.price_bounds
            )));
        }
        Ok(())
    }

    /// The all-default filter value.
    pub fn default_filters(&self) -> FilterOptions {
        FilterOptions::with_bounds(self.price_bounds)
    }

    /// URL codec over the configured bounds.
    pub fn codec(&self) -> UrlCodec {
        UrlCodec::new(self.price_bounds)
    }

    /// Reducer whose reset target is [`default_filters`](Self::default_filters).
    pub fn reducer(&self) -> FilterReducer {
        FilterReducer::new(self.default_filters())
    }
}
