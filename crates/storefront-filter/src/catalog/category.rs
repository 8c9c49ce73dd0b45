//! Category types for product navigation.

use crate::ids::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// A top-level category with its subcategories, as listed by the hosted
/// database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Subcategories in display order.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A second-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    pub id: SubcategoryId,
    /// Owning category.
    pub category_id: CategoryId,
    pub name: String,
}

impl Category {
    /// Create a category without subcategories.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subcategories: Vec::new(),
        }
    }

    /// Add a subcategory under this category.
    pub fn with_subcategory(mut self, id: impl Into<SubcategoryId>, name: impl Into<String>) -> Self {
        self.subcategories.push(Subcategory {
            id: id.into(),
            category_id: self.id.clone(),
            name: name.into(),
        });
        self
    }

    /// Look up a subcategory by id.
    pub fn subcategory(&self, id: &SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| &s.id == id)
    }
}

/// Display name for a category id, falling back to the id itself.
pub fn category_name<'a>(categories: &'a [Category], id: &'a CategoryId) -> &'a str {
    categories
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or_else(|| id.as_str())
}

/// Display name for a subcategory id, falling back to the id itself.
pub fn subcategory_name<'a>(categories: &'a [Category], id: &'a SubcategoryId) -> &'a str {
    categories
        .iter()
        .find_map(|c| c.subcategory(id))
        .map(|s| s.name.as_str())
        .unwrap_or_else(|| id.as_str())
}
