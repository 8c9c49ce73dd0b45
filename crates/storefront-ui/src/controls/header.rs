//! Filter sidebar header: toggle, badge and reset.

use storefront_filter::filter::FilterAction;

/// Display state derived from the parent view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterHeader {
    pub is_open: bool,
    pub has_active_filters: bool,
    pub active_filter_count: usize,
}

impl FilterHeader {
    pub fn new(is_open: bool, active_filter_count: usize) -> Self {
        Self {
            is_open,
            has_active_filters: active_filter_count > 0,
            active_filter_count,
        }
    }

    /// Badge text, hidden when no filter is active.
    pub fn badge(&self) -> Option<String> {
        self.has_active_filters
            .then(|| self.active_filter_count.to_string())
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_open {
            "Hide filters"
        } else {
            "Show filters"
        }
    }

    /// Always a full reset, never a partial clear.
    pub fn reset(&self) -> FilterAction {
        FilterAction::Reset
    }

    pub fn render(&self) -> String {
        let badge = self
            .badge()
            .map(|count| format!(r#"<span class="filter-badge">{}</span>"#, count))
            .unwrap_or_default();

        let reset = if self.has_active_filters {
            r#"<button type="button" class="clear-all" data-filter-action="reset">Clear all</button>"#
        } else {
            ""
        };

        format!(
            r#"<div class="facets-header">
        <button type="button" class="filter-toggle" aria-expanded="{}" data-filter-action="toggle">
            <h2>Filters</h2>
            {}
            <span class="toggle-label">{}</span>
        </button>
        {}
    </div>"#,
            self.is_open,
            badge,
            self.toggle_label(),
            reset
        )
    }
}
