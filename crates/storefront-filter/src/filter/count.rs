//! Active-filter counting for the sidebar badge.

use super::{FilterOptions, PriceRange, StockStatus};

/// Count the dimensions of `filters` that differ from their defaults.
///
/// The price dimension compares against `default_range`, which is the range
/// the sidebar was opened with (normally [`PriceRange::DEFAULT`]).
pub fn count_active_filters(filters: &FilterOptions, default_range: &PriceRange) -> usize {
    [
        filters.search_term().is_some(),
        filters.stock_status != StockStatus::All,
        !filters.categories.is_empty(),
        !filters.subcategories.is_empty(),
        filters.price_range != *default_range,
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_count_zero() {
        assert_eq!(count_active_filters(&FilterOptions::default(), &PriceRange::DEFAULT), 0);
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let filters = FilterOptions::default().with_search(" \t ");
        assert_eq!(count_active_filters(&filters, &PriceRange::DEFAULT), 0);
    }

    #[test]
    fn test_each_dimension_counts_once() {
        let filters = FilterOptions::default()
            .with_search("phone")
            .with_stock_status(StockStatus::OutOfStock)
            .with_category("c1")
            .with_category("c2")
            .with_subcategory("s1")
            .with_price_range(PriceRange::new(0, 500).unwrap());
        assert_eq!(count_active_filters(&filters, &PriceRange::DEFAULT), 5);
    }

    #[test]
    fn test_price_compares_against_supplied_default() {
        let bounds = PriceRange::new(10, 90).unwrap();
        let filters = FilterOptions::with_bounds(bounds);
        assert_eq!(count_active_filters(&filters, &bounds), 0);
        assert_eq!(count_active_filters(&filters, &PriceRange::DEFAULT), 1);
    }

    #[test]
    fn test_single_bound_change_counts() {
        let filters = FilterOptions::default().with_price_range(PriceRange::new(50, 10_000).unwrap());
        assert_eq!(count_active_filters(&filters, &PriceRange::DEFAULT), 1);
    }
}
