//! Filter sidebar for the storefront product listing.
//!
//! This crate provides:
//! - **Controls**: search box, price slider, stock picker, category picker,
//!   header and active-filter chips, each rendered to HTML
//! - **View**: [`FilterView`], which owns the filter state, reduces actions
//!   and keeps the location's query string in sync
//! - **History** and **Notify**: the location and toast seams the view is
//!   generic over, with in-memory implementations
//!
//! # Example
//!
//! ```rust
//! use storefront_ui::prelude::*;
//!
//! let mut view = FilterView::mount(
//!     FilterConfig::default(),
//!     Vec::new(),
//!     MemoryHistory::new("?stock=in-stock"),
//!     NotificationQueue::new(),
//! );
//! assert_eq!(view.active_filter_count(), 1);
//!
//! view.dispatch(FilterAction::SetSearch("lamp".to_string()));
//! assert_eq!(view.history().current_query(), "search=lamp&stock=in-stock");
//! ```

pub mod controls;
pub mod history;
pub mod html;
pub mod notify;
pub mod view;

pub use history::{History, MemoryHistory};
pub use notify::{Notification, NotificationLevel, NotificationQueue, Notifier};
pub use view::FilterView;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::controls::{
        ActiveFilterList, CategoryPicker, FilterHeader, PriceSlider, SearchBox, StockPicker, Thumb,
    };
    pub use crate::history::{History, MemoryHistory};
    pub use crate::notify::{Notification, NotificationLevel, NotificationQueue, Notifier};
    pub use crate::view::FilterView;

    pub use storefront_filter::prelude::*;
}
