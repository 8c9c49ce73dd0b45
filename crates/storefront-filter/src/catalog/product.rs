//! Product rows as the filter layer sees them.

use crate::ids::{CategoryId, ProductId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// The columns of a product row that filtering reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductListing {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: i64,
    /// Units on hand.
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub subcategory_id: Option<SubcategoryId>,
}

impl ProductListing {
    /// Create a listing with no description or category.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price_cents: i64, stock: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price_cents,
            stock,
            category_id: None,
            subcategory_id: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Place the product in a category and, optionally, a subcategory.
    pub fn in_category(
        mut self,
        category: impl Into<CategoryId>,
        subcategory: Option<SubcategoryId>,
    ) -> Self {
        self.category_id = Some(category.into());
        self.subcategory_id = subcategory;
        self
    }
}
