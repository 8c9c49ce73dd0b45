//! Product catalog module.
//!
//! Contains the category tree and the product rows the filters apply to.

mod category;
mod product;

pub use category::{category_name, subcategory_name, Category, Subcategory};
pub use product::ProductListing;
