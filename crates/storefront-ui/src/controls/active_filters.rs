//! Removable chips for the active filters.

use storefront_filter::catalog::{category_name, subcategory_name, Category};
use storefront_filter::filter::{ActiveFilter, FilterAction, FilterDimension};

use crate::html::html_escape;

#[derive(Debug, Clone, Copy)]
pub struct ActiveFilterList<'a> {
    chips: &'a [ActiveFilter],
    categories: &'a [Category],
}

impl<'a> ActiveFilterList<'a> {
    /// `categories` supplies display names for category chips.
    pub fn new(chips: &'a [ActiveFilter], categories: &'a [Category]) -> Self {
        Self { chips, categories }
    }

    /// Chip label, with category ids replaced by their names.
    pub fn label(&self, chip: &ActiveFilter) -> String {
        let value = match &chip.clear {
            FilterAction::ToggleCategory(id) => category_name(self.categories, id),
            FilterAction::ToggleSubcategory(id) => subcategory_name(self.categories, id),
            _ => chip.value.as_str(),
        };
        format!("{}: {}", chip.dimension.display_name(), value)
    }

    /// The action behind the chip's remove button.
    pub fn remove(&self, index: usize) -> Option<FilterAction> {
        self.chips.get(index).map(|chip| chip.clear.clone())
    }

    pub fn render(&self) -> String {
        if self.chips.is_empty() {
            return String::new();
        }

        let chips_html: Vec<String> = self
            .chips
            .iter()
            .enumerate()
            .map(|(index, chip)| {
                format!(
                    r#"<span class="active-filter" data-dimension="{}">
                {}
                <button data-filter-action="remove-chip" data-chip="{}" aria-label="Remove filter">&times;</button>
            </span>"#,
                    dimension_key(chip.dimension),
                    html_escape(&self.label(chip)),
                    index
                )
            })
            .collect();

        format!(
            r#"<div class="active-filters">
                {}
            </div>"#,
            chips_html.join("\n")
        )
    }
}

fn dimension_key(dimension: FilterDimension) -> &'static str {
    match dimension {
        FilterDimension::Search => "search",
        FilterDimension::Price => "price",
        FilterDimension::Stock => "stock",
        FilterDimension::Category => "category",
        FilterDimension::Subcategory => "subcategory",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_filter::filter::{active_filters, FilterOptions};

    #[test]
    fn test_category_chips_use_names() {
        let categories = vec![Category::new("c1", "Kitchen").with_subcategory("s1", "Knives")];
        let filters = FilterOptions::default()
            .with_search("steel")
            .with_category("c1")
            .with_subcategory("s1");
        let chips = active_filters(&filters, &FilterOptions::default());
        let list = ActiveFilterList::new(&chips, &categories);

        let labels: Vec<_> = chips.iter().map(|chip| list.label(chip)).collect();
        assert_eq!(labels, vec!["Search: steel", "Category: Kitchen", "Subcategory: Knives"]);
        assert_eq!(list.remove(1), Some(FilterAction::ToggleCategory("c1".into())));
        assert_eq!(list.remove(9), None);
    }

    #[test]
    fn test_render_escapes_search_text() {
        let filters = FilterOptions::default().with_search("<b>");
        let chips = active_filters(&filters, &FilterOptions::default());
        let html = ActiveFilterList::new(&chips, &[]).render();
        assert!(html.contains("Search: &lt;b&gt;"));
        assert_eq!(ActiveFilterList::new(&[], &[]).render(), "");
    }
}
