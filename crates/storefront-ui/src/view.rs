//! Product listing filter view.
//!
//! Owns the authoritative [`FilterOptions`] for one listing page and keeps
//! the browser URL in step with it.

use storefront_filter::catalog::{Category, ProductListing};
use storefront_filter::filter::{
    active_filters, count_active_filters, ActiveFilter, FilterAction, FilterOptions, FilterReducer,
    UrlCodec,
};
use storefront_filter::search::ProductQuery;
use storefront_filter::FilterConfig;

use crate::controls::{
    ActiveFilterList, CategoryPicker, FilterHeader, PriceSlider, SearchBox, StockPicker, Thumb,
};
use crate::history::History;
use crate::notify::{Notification, Notifier};

/// Filter state of a mounted listing page.
///
/// Every filter change goes through [`dispatch`](Self::dispatch), which
/// reduces the action and rewrites the current history entry's query
/// string. History entries are replaced, never pushed, so editing filters
/// does not grow back/forward navigation.
pub struct FilterView<H: History, N: Notifier> {
    config: FilterConfig,
    codec: UrlCodec,
    reducer: FilterReducer,
    filters: FilterOptions,
    is_open: bool,
    slider: PriceSlider,
    categories: Vec<Category>,
    history: H,
    notifier: N,
}

impl<H: History, N: Notifier> FilterView<H, N> {
    /// Build the view from the current location's query string.
    ///
    /// A query that does not decode to its canonical form (stale keys,
    /// malformed prices) is rewritten in place.
    pub fn mount(config: FilterConfig, categories: Vec<Category>, history: H, notifier: N) -> Self {
        let codec = config.codec();
        let reducer = config.reducer();
        let filters = codec.decode(&history.current_query());
        let slider = PriceSlider::from_config(filters.price_range, &config);

        let mut view = Self {
            config,
            codec,
            reducer,
            filters,
            is_open: false,
            slider,
            categories,
            history,
            notifier,
        };
        tracing::debug!(active = view.active_filter_count(), "mounted filter view");
        view.sync_url();
        view
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Apply an action. Returns whether the filters changed.
    pub fn dispatch(&mut self, action: FilterAction) -> bool {
        let is_reset = action == FilterAction::Reset;
        let next = self.reducer.reduce(&self.filters, action);
        if next == self.filters {
            return false;
        }

        self.filters = next;
        self.slider.sync(self.filters.price_range);
        self.sync_url();

        if is_reset && self.config.notify_on_reset {
            self.notifier.notify(Notification::info("Filters cleared"));
        }
        true
    }

    /// Re-read the filters after back/forward navigation.
    pub fn navigate(&mut self) {
        self.filters = self.codec.decode(&self.history.current_query());
        self.slider.sync(self.filters.price_range);
        tracing::debug!(active = self.active_filter_count(), "filters restored from navigation");
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn active_filter_count(&self) -> usize {
        count_active_filters(&self.filters, self.codec.bounds())
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    pub fn chips(&self) -> Vec<ActiveFilter> {
        active_filters(&self.filters, self.reducer.defaults())
    }

    /// Remove the chip at `index` of [`chips`](Self::chips).
    pub fn remove_chip(&mut self, index: usize) -> bool {
        let chips = self.chips();
        match ActiveFilterList::new(&chips, &self.categories).remove(index) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    pub fn header(&self) -> FilterHeader {
        FilterHeader::new(self.is_open, self.active_filter_count())
    }

    pub fn search_box(&self) -> SearchBox<'_> {
        SearchBox::new(&self.filters.search)
    }

    pub fn stock_picker(&self) -> StockPicker {
        StockPicker::new(self.filters.stock_status)
    }

    pub fn category_picker(&self) -> CategoryPicker<'_> {
        CategoryPicker::new(
            &self.categories,
            &self.filters.categories,
            &self.filters.subcategories,
        )
    }

    pub fn price_slider(&self) -> &PriceSlider {
        &self.slider
    }

    /// Move a slider thumb without touching the filters.
    pub fn drag_price(&mut self, thumb: Thumb, raw: u32) {
        self.slider.drag(thumb, raw);
    }

    /// Commit the slider drag into the filters.
    pub fn commit_price(&mut self) -> bool {
        match self.slider.commit() {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Query to send to the hosted database.
    pub fn product_query(&self) -> ProductQuery {
        ProductQuery::from_filters(&self.filters, self.codec.bounds())
    }

    /// Filter an already loaded product list.
    pub fn apply<'a>(&self, products: &'a [ProductListing]) -> Vec<&'a ProductListing> {
        self.product_query().apply(products)
    }

    /// Shareable link to `path` with the current filters.
    pub fn href(&self, path: &str) -> String {
        self.codec.href(path, &self.filters)
    }

    /// Render the sidebar; the controls are only rendered while open.
    pub fn render(&self) -> String {
        let chips = self.chips();
        let chips_html = ActiveFilterList::new(&chips, &self.categories).render();

        let controls_html = if self.is_open {
            [
                self.search_box().render(),
                self.slider.render(),
                self.stock_picker().render(),
                self.category_picker().render(),
            ]
            .join("\n")
        } else {
            String::new()
        };

        format!(
            r#"<aside class="facets-sidebar" data-section="facets">
    {}
    {}
    {}
</aside>"#,
            self.header().render(),
            chips_html,
            controls_html
        )
    }

    fn sync_url(&mut self) {
        let query = self.codec.encode(&self.filters);
        if query != self.history.current_query() {
            tracing::debug!(%query, "replacing filter query string");
            self.history.replace_query(&query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::notify::{NotificationLevel, NotificationQueue};
    use storefront_filter::filter::{PriceRange, StockStatus};

    fn mount(query: &str) -> FilterView<MemoryHistory, NotificationQueue> {
        let categories = vec![
            Category::new("electronics", "Electronics").with_subcategory("phones", "Phones"),
            Category::new("garden", "Garden"),
        ];
        FilterView::mount(
            FilterConfig::default(),
            categories,
            MemoryHistory::new(query),
            NotificationQueue::new(),
        )
    }

    #[test]
    fn test_mount_decodes_location() {
        let view = mount("search=phone&stock=in-stock");
        assert_eq!(view.filters().search, "phone");
        assert_eq!(view.filters().stock_status, StockStatus::InStock);
        assert_eq!(view.active_filter_count(), 2);
        assert_eq!(view.history().current_query(), "search=phone&stock=in-stock");
    }

    #[test]
    fn test_mount_canonicalizes_query() {
        let view = mount("minPrice=abc&page=2&categories=c1,,c1");
        assert_eq!(view.history().current_query(), "categories=c1");
        assert_eq!(view.history().len(), 1);
    }

    #[test]
    fn test_dispatch_replaces_history_entry() {
        let mut view = mount("");
        assert!(view.dispatch(FilterAction::SetSearch("lamp".to_string())));
        assert!(view.dispatch(FilterAction::ToggleCategory("garden".into())));

        assert_eq!(view.history().len(), 1);
        assert_eq!(view.history().current_query(), "search=lamp&categories=garden");
    }

    #[test]
    fn test_unencodable_category_keeps_url_and_state_in_step() {
        let mut view = mount("categories=garden");
        assert!(!view.dispatch(FilterAction::ToggleCategory("".into())));
        assert!(!view.dispatch(FilterAction::ToggleSubcategory("a,b".into())));

        assert_eq!(view.history().current_query(), "categories=garden");
        assert_eq!(view.active_filter_count(), 1);

        let reloaded = mount(&view.history().current_query());
        assert_eq!(reloaded.filters(), view.filters());
    }

    #[test]
    fn test_unchanged_dispatch_is_a_no_op() {
        let mut view = mount("stock=all");
        assert!(!view.dispatch(FilterAction::SetStockStatus(StockStatus::All)));
        assert!(!view.dispatch(FilterAction::Reset));
        assert!(view.notifier().is_empty());
    }

    #[test]
    fn test_reset_clears_everything_and_notifies() {
        let mut view = mount("search=phone&stock=in-stock&categories=electronics");
        assert_eq!(view.active_filter_count(), 3);

        assert!(view.dispatch(view.header().reset()));
        assert_eq!(view.filters(), &FilterOptions::default());
        assert_eq!(view.history().current_query(), "");

        let notifications = view.notifier().drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Info);
    }

    #[test]
    fn test_reset_notification_can_be_disabled() {
        let config = FilterConfig {
            notify_on_reset: false,
            ..FilterConfig::default()
        };
        let mut view = FilterView::mount(config, vec![], MemoryHistory::new("search=x"), NotificationQueue::new());
        assert!(view.dispatch(FilterAction::Reset));
        assert!(view.notifier().is_empty());
    }

    #[test]
    fn test_slider_commits_through_dispatch() {
        let mut view = mount("");
        view.drag_price(Thumb::Min, 480);
        view.drag_price(Thumb::Max, 2010);
        assert_eq!(view.filters().price_range, PriceRange::DEFAULT);

        assert!(view.commit_price());
        assert_eq!(view.filters().price_range, PriceRange::new(500, 2000).unwrap());
        assert_eq!(view.history().current_query(), "minPrice=500&maxPrice=2000");
    }

    #[test]
    fn test_remove_chip() {
        let mut view = mount("search=phone&categories=electronics,garden");
        assert!(view.remove_chip(1));
        assert_eq!(view.history().current_query(), "search=phone&categories=garden");
        assert!(!view.remove_chip(5));
    }

    #[test]
    fn test_navigate_rereads_location() {
        let mut view = mount("");
        view.history_mut().push_query("stock=out-of-stock");
        view.navigate();
        assert_eq!(view.filters().stock_status, StockStatus::OutOfStock);

        view.history_mut().back();
        view.navigate();
        assert_eq!(view.filters(), &FilterOptions::default());
    }

    #[test]
    fn test_render_controls_only_when_open() {
        let mut view = mount("categories=electronics");
        let closed = view.render();
        assert!(closed.contains("filter-badge"));
        assert!(closed.contains("Category: Electronics"));
        assert!(!closed.contains("price-slider"));

        view.toggle_open();
        let open = view.render();
        assert!(open.contains("price-slider"));
        assert!(open.contains("Phones"));
    }

    #[test]
    fn test_apply_and_href() {
        let view = mount("stock=in-stock");
        let products = vec![
            ProductListing::new("p1", "Hose", 2000, 0),
            ProductListing::new("p2", "Rake", 1500, 2),
        ];
        let matched = view.apply(&products);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "p2");
        assert_eq!(view.href("/products"), "/products?stock=in-stock");
    }
}
