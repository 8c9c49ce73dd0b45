//! Search box with inline clear button.

use storefront_filter::filter::{FilterAction, SEARCH_KEY};

use crate::html::html_escape;

/// Free-text search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBox<'a> {
    value: &'a str,
    placeholder: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "Search products...",
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn value(&self) -> &str {
        self.value
    }

    /// The input's new text; emitted as typed, without trimming.
    pub fn input(&self, raw: &str) -> FilterAction {
        FilterAction::SetSearch(raw.to_string())
    }

    /// The inline clear button.
    pub fn clear(&self) -> FilterAction {
        FilterAction::SetSearch(String::new())
    }

    pub fn render(&self) -> String {
        let clear_button = if self.value.is_empty() {
            String::new()
        } else {
            r#"<button type="button" class="search-clear" data-filter-action="clear-search" aria-label="Clear search">&times;</button>"#
                .to_string()
        };

        format!(
            r#"<div class="filter-search">
    <input type="search" name="{}" value="{}" placeholder="{}" aria-label="Search" data-filter-action="set-search">
    {}
</div>"#,
            SEARCH_KEY,
            html_escape(self.value),
            html_escape(self.placeholder),
            clear_button
        )
    }
}
