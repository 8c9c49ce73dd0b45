//! Filter transitions as explicit actions.

use super::codec::is_list_value;
use super::{FilterOptions, PriceRange, StockStatus};
use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// A single change to the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum FilterAction {
    /// Replace the search text.
    SetSearch(String),
    /// Replace the price range.
    SetPriceRange(PriceRange),
    /// Replace the stock status.
    SetStockStatus(StockStatus),
    /// Select the category, or deselect it if already selected.
    ToggleCategory(CategoryId),
    /// Select the subcategory, or deselect it if already selected.
    ToggleSubcategory(SubcategoryId),
    /// Return every dimension to its default.
    Reset,
}

impl FilterAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            FilterAction::SetSearch(_) => "set-search",
            FilterAction::SetPriceRange(_) => "set-price-range",
            FilterAction::SetStockStatus(_) => "set-stock-status",
            FilterAction::ToggleCategory(_) => "toggle-category",
            FilterAction::ToggleSubcategory(_) => "toggle-subcategory",
            FilterAction::Reset => "reset",
        }
    }
}

/// Applies [`FilterAction`]s against a fixed set of defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterReducer {
    defaults: FilterOptions,
}

impl FilterReducer {
    /// Create a reducer whose reset target is `defaults`.
    pub fn new(defaults: FilterOptions) -> Self {
        Self { defaults }
    }

    /// Create a reducer over custom price bounds.
    pub fn with_bounds(bounds: PriceRange) -> Self {
        Self::new(FilterOptions::with_bounds(bounds))
    }

    /// The value `Reset` produces.
    pub fn defaults(&self) -> &FilterOptions {
        &self.defaults
    }

    /// Produce the filters that follow `current` after `action`.
    ///
    /// Price ranges are clamped into the default range.
    pub fn reduce(&self, current: &FilterOptions, action: FilterAction) -> FilterOptions {
        tracing::trace!(action = action.name(), "reducing filter action");

        match action {
            FilterAction::SetSearch(search) => FilterOptions {
                search,
                ..current.clone()
            },
            FilterAction::SetPriceRange(range) => FilterOptions {
                price_range: range.clamp_to(&self.defaults.price_range),
                ..current.clone()
            },
            FilterAction::SetStockStatus(stock_status) => FilterOptions {
                stock_status,
                ..current.clone()
            },
            FilterAction::ToggleCategory(id) => FilterOptions {
                categories: toggle(&current.categories, id),
                ..current.clone()
            },
            FilterAction::ToggleSubcategory(id) => FilterOptions {
                subcategories: toggle(&current.subcategories, id),
                ..current.clone()
            },
            FilterAction::Reset => self.defaults.clone(),
        }
    }
}

/// Reduce with the standard defaults.
pub fn reduce(current: &FilterOptions, action: FilterAction) -> FilterOptions {
    FilterReducer::default().reduce(current, action)
}

/// Empty ids and ids containing the list separator cannot be encoded, so
/// toggling them leaves the selection unchanged.
fn toggle<T: Clone + PartialEq + AsRef<str>>(selected: &[T], id: T) -> Vec<T> {
    if !is_list_value(id.as_ref()) {
        tracing::debug!(id = id.as_ref(), "ignoring toggle of unencodable id");
        return selected.to_vec();
    }
    if selected.contains(&id) {
        selected.iter().filter(|s| **s != id).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{count_active_filters, decode, encode};

    #[test]
    fn test_set_search_replaces_only_search() {
        let current = FilterOptions::default().with_category("c1");
        let next = reduce(&current, FilterAction::SetSearch("lamp".to_string()));
        assert_eq!(next.search, "lamp");
        assert_eq!(next.categories, current.categories);
    }

    #[test]
    fn test_toggle_category_adds_then_removes() {
        let start = FilterOptions::default().with_category("c1");
        let added = reduce(&start, FilterAction::ToggleCategory("c2".into()));
        assert_eq!(added.categories, vec![CategoryId::new("c1"), CategoryId::new("c2")]);

        let removed = reduce(&added, FilterAction::ToggleCategory("c1".into()));
        assert_eq!(removed.categories, vec![CategoryId::new("c2")]);
    }

    #[test]
    fn test_toggle_subcategory() {
        let next = reduce(&FilterOptions::default(), FilterAction::ToggleSubcategory("s1".into()));
        assert_eq!(next.subcategories, vec![SubcategoryId::new("s1")]);
        let back = reduce(&next, FilterAction::ToggleSubcategory("s1".into()));
        assert!(back.subcategories.is_empty());
    }

    #[test]
    fn test_unencodable_ids_are_not_toggled() {
        let current = FilterOptions::default().with_category("c1");
        for action in [
            FilterAction::ToggleCategory("".into()),
            FilterAction::ToggleCategory("a,b".into()),
            FilterAction::ToggleSubcategory("".into()),
            FilterAction::ToggleSubcategory("s1,s2".into()),
        ] {
            let next = reduce(&current, action);
            assert_eq!(next, current);
            assert_eq!(decode(&encode(&next)), next);
        }
        assert_eq!(count_active_filters(&current, &PriceRange::DEFAULT), 1);
    }

    #[test]
    fn test_price_range_is_clamped() {
        let reducer = FilterReducer::with_bounds(PriceRange::new(0, 1000).unwrap());
        let next = reducer.reduce(
            reducer.defaults(),
            FilterAction::SetPriceRange(PriceRange::new(200, 5000).unwrap()),
        );
        assert_eq!(next.price_range, PriceRange::new(200, 1000).unwrap());
    }

    #[test]
    fn test_reset_restores_all_defaults() {
        let current = FilterOptions::default()
            .with_search("phone")
            .with_stock_status(StockStatus::InStock)
            .with_category("c1");
        assert_eq!(count_active_filters(&current, &PriceRange::DEFAULT), 3);

        let next = reduce(&current, FilterAction::Reset);
        assert_eq!(next, FilterOptions::default());
    }

    #[test]
    fn test_reducer_leaves_input_untouched() {
        let current = FilterOptions::default().with_search("a");
        let _ = reduce(&current, FilterAction::SetSearch("b".to_string()));
        assert_eq!(current.search, "a");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&FilterAction::SetStockStatus(StockStatus::InStock)).unwrap();
        assert_eq!(json, r#"{"type":"set-stock-status","value":"in-stock"}"#);
        let reset: FilterAction = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(reset, FilterAction::Reset);
    }
}
