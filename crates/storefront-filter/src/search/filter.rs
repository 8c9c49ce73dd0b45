//! Product query clauses.

use crate::catalog::ProductListing;
use crate::filter::StockStatus;
use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// One clause of a product query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring of name or description.
    Text(String),
    /// Inclusive price range, in cents.
    PriceRange { min_cents: i64, max_cents: i64 },
    /// Stock availability; `All` matches everything.
    Stock(StockStatus),
    /// Product in any of these categories.
    Categories(Vec<CategoryId>),
    /// Product in any of these subcategories.
    Subcategories(Vec<SubcategoryId>),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a price range filter.
    pub fn price_range(min_cents: i64, max_cents: i64) -> Self {
        Filter::PriceRange { min_cents, max_cents }
    }

    /// Build SQL WHERE clause component.
    pub fn to_sql(&self) -> (String, Vec<String>) {
        match self {
            Filter::Text(query) => {
                let pattern = format!("%{}%", escape_like(query));
                (
                    r"(name LIKE ? ESCAPE '\' OR description LIKE ? ESCAPE '\')".to_string(),
                    vec![pattern.clone(), pattern],
                )
            }
            Filter::PriceRange { min_cents, max_cents } => (
                "price_cents >= ? AND price_cents <= ?".to_string(),
                vec![min_cents.to_string(), max_cents.to_string()],
            ),
            Filter::Stock(StockStatus::All) => ("1=1".to_string(), vec![]),
            Filter::Stock(StockStatus::InStock) => ("stock > 0".to_string(), vec![]),
            Filter::Stock(StockStatus::OutOfStock) => ("stock <= 0".to_string(), vec![]),
            Filter::Categories(ids) => in_clause("category_id", ids),
            Filter::Subcategories(ids) => in_clause("subcategory_id", ids),
        }
    }

    /// Evaluate the clause against a product row in memory.
    pub fn matches(&self, product: &ProductListing) -> bool {
        match self {
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
            Filter::PriceRange { min_cents, max_cents } => {
                *min_cents <= product.price_cents && product.price_cents <= *max_cents
            }
            Filter::Stock(status) => status.admits(product.stock),
            Filter::Categories(ids) => product
                .category_id
                .as_ref()
                .is_some_and(|id| ids.contains(id)),
            Filter::Subcategories(ids) => product
                .subcategory_id
                .as_ref()
                .is_some_and(|id| ids.contains(id)),
        }
    }
}

/// Escape `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn in_clause<T: AsRef<str>>(column: &str, ids: &[T]) -> (String, Vec<String>) {
    if ids.is_empty() {
        return ("1=0".to_string(), vec![]);
    }
    let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
    let values = ids.iter().map(|id| id.as_ref().to_string()).collect();
    (format!("{} IN ({})", column, placeholders), values)
}
