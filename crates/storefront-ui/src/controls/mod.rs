//! Filter sidebar controls.
//!
//! Each control reads a slice of the current filters, renders it, and turns
//! raw input into a complete [`FilterAction`](storefront_filter::filter::FilterAction)
//! for the parent view to reduce.

mod active_filters;
mod category_picker;
mod header;
mod price_slider;
mod search_box;
mod stock_picker;

pub use active_filters::ActiveFilterList;
pub use category_picker::CategoryPicker;
pub use header::FilterHeader;
pub use price_slider::{PriceSlider, Thumb};
pub use search_box::SearchBox;
pub use stock_picker::StockPicker;
