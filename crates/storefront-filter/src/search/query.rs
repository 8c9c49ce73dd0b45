//! Product query derived from filter state.

use crate::catalog::ProductListing;
use crate::filter::{FilterOptions, PriceRange, StockStatus};
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// A product query: the conjunction of its filters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Filters to apply; an empty list matches every product.
    pub filters: Vec<Filter>,
}

impl ProductQuery {
    /// Create an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the query for the active dimensions of `options`.
    ///
    /// The price dimension is only emitted when it differs from
    /// `default_range`, so the default sidebar state queries everything.
    pub fn from_filters(options: &FilterOptions, default_range: &PriceRange) -> Self {
        let mut query = Self::new();

        if let Some(term) = options.search_term() {
            query = query.with_filter(Filter::text(term));
        }
        if options.price_range != *default_range {
            let (min_cents, max_cents) = options.price_range.as_cents();
            query = query.with_filter(Filter::price_range(min_cents, max_cents));
        }
        if options.stock_status != StockStatus::All {
            query = query.with_filter(Filter::Stock(options.stock_status));
        }
        if !options.categories.is_empty() {
            query = query.with_filter(Filter::Categories(options.categories.clone()));
        }
        if !options.subcategories.is_empty() {
            query = query.with_filter(Filter::Subcategories(options.subcategories.clone()));
        }

        query
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check whether the query restricts anything.
    pub fn is_unfiltered(&self) -> bool {
        self.filters.is_empty()
    }

    /// Build SQL WHERE clause from filters.
    pub fn build_where_clause(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut all_values = Vec::new();

        for filter in &self.filters {
            let (clause, values) = filter.to_sql();
            if !clause.is_empty() && clause != "1=1" {
                clauses.push(format!("({})", clause));
                all_values.extend(values);
            }
        }

        if clauses.is_empty() {
            return ("1=1".to_string(), vec![]);
        }

        (clauses.join(" AND "), all_values)
    }

    /// Build the product listing query.
    pub fn build_sql(&self) -> (String, Vec<String>) {
        let (where_clause, values) = self.build_where_clause();
        (format!("SELECT * FROM products WHERE {} ORDER BY name ASC", where_clause), values)
    }

    /// Build count SQL query.
    pub fn build_count_sql(&self) -> (String, Vec<String>) {
        let (where_clause, values) = self.build_where_clause();
        let sql = format!("SELECT COUNT(*) as count FROM products WHERE {}", where_clause);
        (sql, values)
    }

    /// Check a product row against every filter.
    pub fn matches(&self, product: &ProductListing) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }

    /// Keep the products that match, preserving order.
    pub fn apply<'a>(&self, products: &'a [ProductListing]) -> Vec<&'a ProductListing> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl FilterOptions {
    /// Check a product row against these filters with the standard price
    /// defaults.
    pub fn matches(&self, product: &ProductListing) -> bool {
        ProductQuery::from_filters(self, &PriceRange::DEFAULT).matches(product)
    }
}
