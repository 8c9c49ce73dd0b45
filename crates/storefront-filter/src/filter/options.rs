//! The filter value and its dimensions.

use super::codec::is_list_value;
use crate::error::FilterError;
use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest price the storefront filters on, in whole currency units.
pub const DEFAULT_MIN_PRICE: u32 = 0;

/// Highest price the storefront filters on, in whole currency units.
pub const DEFAULT_MAX_PRICE: u32 = 10_000;

/// An inclusive price range in whole currency units.
///
/// `min <= max` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = FilterError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::new(raw.min, raw.max)
    }
}

impl PriceRange {
    /// The full `0..=10000` range; never counts as an active filter.
    pub const DEFAULT: PriceRange = PriceRange {
        min: DEFAULT_MIN_PRICE,
        max: DEFAULT_MAX_PRICE,
    };

    /// Create a range, rejecting `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create a range from two bounds in either order.
    pub fn ordered(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Clamp both bounds into `bounds`.
    pub fn clamp_to(&self, bounds: &PriceRange) -> PriceRange {
        PriceRange {
            min: self.min.clamp(bounds.min, bounds.max),
            max: self.max.clamp(bounds.min, bounds.max),
        }
    }

    /// Check whether a whole-unit price falls inside the range.
    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    /// Check whether a price in cents falls inside the range.
    pub fn contains_cents(&self, price_cents: i64) -> bool {
        let (min, max) = self.as_cents();
        min <= price_cents && price_cents <= max
    }

    /// Both bounds in cents, as stored by the product table.
    pub fn as_cents(&self) -> (i64, i64) {
        (i64::from(self.min) * 100, i64::from(self.max) * 100)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

/// Stock availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// No stock restriction.
    #[default]
    All,
    /// Only products with stock on hand.
    InStock,
    /// Only products without stock.
    OutOfStock,
}

impl StockStatus {
    /// Every status, in picker order.
    pub const ALL: [StockStatus; 3] = [StockStatus::All, StockStatus::InStock, StockStatus::OutOfStock];

    /// Wire name used in the `stock` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::All => "all",
            StockStatus::InStock => "in-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::All => "All products",
            StockStatus::InStock => "In stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }

    /// Check a stock quantity against this status.
    pub fn admits(&self, stock: i64) -> bool {
        match self {
            StockStatus::All => true,
            StockStatus::InStock => stock > 0,
            StockStatus::OutOfStock => stock <= 0,
        }
    }
}

impl FromStr for StockStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StockStatus::All),
            "in-stock" => Ok(StockStatus::InStock),
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            other => Err(FilterError::UnknownStockStatus(other.to_string())),
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full state of the product filter sidebar.
///
/// Treated as a value: every change produces a new `FilterOptions` through
/// [`FilterReducer`](crate::filter::FilterReducer) rather than mutating the
/// current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Free-text query; empty means no text filter.
    pub search: String,
    /// Inclusive price range.
    pub price_range: PriceRange,
    /// Stock availability.
    pub stock_status: StockStatus,
    /// Selected categories, in selection order.
    pub categories: Vec<CategoryId>,
    /// Selected subcategories, in selection order.
    pub subcategories: Vec<SubcategoryId>,
}

impl FilterOptions {
    /// All-default filters over a custom price range.
    pub fn with_bounds(bounds: PriceRange) -> Self {
        Self {
            price_range: bounds,
            ..Default::default()
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the stock status.
    pub fn with_stock_status(mut self, status: StockStatus) -> Self {
        self.stock_status = status;
        self
    }

    /// Select a category if not already selected. Empty ids and ids
    /// containing the list separator are ignored.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        let id = id.into();
        if is_list_value(id.as_str()) && !self.categories.contains(&id) {
            self.categories.push(id);
        }
        self
    }

    /// Select a subcategory if not already selected. Empty ids and ids
    /// containing the list separator are ignored.
    pub fn with_subcategory(mut self, id: impl Into<SubcategoryId>) -> Self {
        let id = id.into();
        if is_list_value(id.as_str()) && !self.subcategories.contains(&id) {
            self.subcategories.push(id);
        }
        self
    }

    /// Trimmed search text, or `None` when there is no text filter.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Check whether any dimension differs from its default.
    pub fn has_active_filters(&self, default_range: &PriceRange) -> bool {
        crate::filter::count_active_filters(self, default_range) > 0
    }
}
