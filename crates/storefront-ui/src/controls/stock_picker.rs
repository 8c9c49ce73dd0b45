//! Stock availability radio group.

use storefront_filter::filter::{FilterAction, StockStatus, STOCK_KEY};

use crate::html::checked;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockPicker {
    value: StockStatus,
}

impl StockPicker {
    pub fn new(value: StockStatus) -> Self {
        Self { value }
    }

    pub fn value(&self) -> StockStatus {
        self.value
    }

    /// Choices in display order.
    pub fn options(&self) -> impl Iterator<Item = (StockStatus, bool)> + '_ {
        StockStatus::ALL
            .into_iter()
            .map(move |status| (status, status == self.value))
    }

    /// Map a submitted wire name to an action; unknown names emit nothing.
    pub fn select(&self, raw: &str) -> Option<FilterAction> {
        match raw.parse::<StockStatus>() {
            Ok(status) => Some(FilterAction::SetStockStatus(status)),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring stock picker input");
                None
            }
        }
    }

    pub fn render(&self) -> String {
        let options_html: String = self
            .options()
            .map(|(status, selected)| {
                format!(
                    r#"<label class="facet-option">
            <input type="radio" name="{}" value="{}"{} data-filter-action="set-stock-status">
            <span class="facet-label">{}</span>
        </label>"#,
                    STOCK_KEY,
                    status.as_str(),
                    checked(selected),
                    status.display_name()
                )
            })
            .collect();

        format!(
            r#"<div class="facet-group" data-facet="stock">
        <h3 class="facet-title">Availability</h3>
        <div class="facet-options">
            {}
        </div>
    </div>"#,
            options_html
        )
    }
}
