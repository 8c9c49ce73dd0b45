//! Removable descriptors for each active filter.

use super::{FilterAction, FilterOptions, StockStatus};
use serde::{Deserialize, Serialize};

/// One independently toggleable axis of the product query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDimension {
    Search,
    Price,
    Stock,
    Category,
    Subcategory,
}

impl FilterDimension {
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterDimension::Search => "Search",
            FilterDimension::Price => "Price",
            FilterDimension::Stock => "Stock",
            FilterDimension::Category => "Category",
            FilterDimension::Subcategory => "Subcategory",
        }
    }
}

/// An active filter as shown in the sidebar header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    /// Dimension this chip belongs to.
    pub dimension: FilterDimension,
    /// Display value (search term, price range, stock name or id).
    pub value: String,
    /// Action that removes exactly this chip.
    pub clear: FilterAction,
}

impl ActiveFilter {
    /// Human-readable label, e.g. `Search: phone`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.dimension.display_name(), self.value)
    }
}

/// List the active filters of `filters` relative to `defaults`.
///
/// Every selected category and subcategory gets its own chip; the other
/// dimensions produce at most one.
pub fn active_filters(filters: &FilterOptions, defaults: &FilterOptions) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if let Some(term) = filters.search_term() {
        chips.push(ActiveFilter {
            dimension: FilterDimension::Search,
            value: term.to_string(),
            clear: FilterAction::SetSearch(String::new()),
        });
    }

    if filters.price_range != defaults.price_range {
        chips.push(ActiveFilter {
            dimension: FilterDimension::Price,
            value: filters.price_range.to_string(),
            clear: FilterAction::SetPriceRange(defaults.price_range),
        });
    }

    if filters.stock_status != StockStatus::All {
        chips.push(ActiveFilter {
            dimension: FilterDimension::Stock,
            value: filters.stock_status.display_name().to_string(),
            clear: FilterAction::SetStockStatus(StockStatus::All),
        });
    }

    chips.extend(filters.categories.iter().map(|id| ActiveFilter {
        dimension: FilterDimension::Category,
        value: id.to_string(),
        clear: FilterAction::ToggleCategory(id.clone()),
    }));

    chips.extend(filters.subcategories.iter().map(|id| ActiveFilter {
        dimension: FilterDimension::Subcategory,
        value: id.to_string(),
        clear: FilterAction::ToggleSubcategory(id.clone()),
    }));

    chips
}
