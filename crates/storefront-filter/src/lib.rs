//! Product filter state for the storefront.
//!
//! This crate owns the filter sidebar's data model and every pure
//! computation on it:
//!
//! - **Filter**: `FilterOptions`, the active-filter counter, the URL
//!   query-string codec, the action reducer and active-filter chips
//! - **Search**: product query clauses derived from filter state, as SQL for
//!   the hosted database or as an in-memory predicate
//! - **Catalog**: category tree and product rows
//! - **Config**: price bounds and slider step
//!
//! # Example
//!
//! ```rust
//! use storefront_filter::prelude::*;
//!
//! let filters = decode("search=phone&stock=in-stock");
//! assert_eq!(count_active_filters(&filters, &PriceRange::DEFAULT), 2);
//!
//! let filters = reduce(&filters, FilterAction::ToggleCategory("c1".into()));
//! assert_eq!(encode(&filters), "search=phone&stock=in-stock&categories=c1");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod ids;
pub mod search;

pub use config::FilterConfig;
pub use error::FilterError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::FilterConfig;
    pub use crate::error::FilterError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{Category, ProductListing, Subcategory};

    // Filter
    pub use crate::filter::{
        active_filters, count_active_filters, decode, encode, reduce, ActiveFilter, FilterAction,
        FilterDimension, FilterOptions, FilterReducer, PriceRange, StockStatus, UrlCodec,
    };

    // Search
    pub use crate::search::{Filter, ProductQuery};
}
