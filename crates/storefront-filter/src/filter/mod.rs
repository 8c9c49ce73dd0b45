//! Filter module.
//!
//! Contains the filter value, its URL codec, the reducer that drives it and
//! the helpers the sidebar derives from it.

mod action;
mod chips;
mod codec;
mod count;
mod options;

pub use action::{reduce, FilterAction, FilterReducer};
pub use chips::{active_filters, ActiveFilter, FilterDimension};
pub use codec::{
    decode, encode, UrlCodec, CATEGORIES_KEY, LIST_SEPARATOR, MAX_PRICE_KEY, MIN_PRICE_KEY,
    SEARCH_KEY, STOCK_KEY, SUBCATEGORIES_KEY,
};
pub use count::count_active_filters;
pub use options::{FilterOptions, PriceRange, StockStatus, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
