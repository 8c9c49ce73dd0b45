//! Category and subcategory checkboxes.

use storefront_filter::catalog::{Category, Subcategory};
use storefront_filter::filter::{FilterAction, CATEGORIES_KEY, SUBCATEGORIES_KEY};
use storefront_filter::ids::{CategoryId, SubcategoryId};

use crate::html::{checked, html_escape};

/// Category tree with the current selections.
///
/// Subcategories are offered only beneath selected categories.
#[derive(Debug, Clone, Copy)]
pub struct CategoryPicker<'a> {
    categories: &'a [Category],
    selected_categories: &'a [CategoryId],
    selected_subcategories: &'a [SubcategoryId],
}

impl<'a> CategoryPicker<'a> {
    pub fn new(
        categories: &'a [Category],
        selected_categories: &'a [CategoryId],
        selected_subcategories: &'a [SubcategoryId],
    ) -> Self {
        Self {
            categories,
            selected_categories,
            selected_subcategories,
        }
    }

    pub fn is_selected(&self, id: &CategoryId) -> bool {
        self.selected_categories.contains(id)
    }

    pub fn is_subcategory_selected(&self, id: &SubcategoryId) -> bool {
        self.selected_subcategories.contains(id)
    }

    pub fn toggle_category(&self, id: impl Into<CategoryId>) -> FilterAction {
        FilterAction::ToggleCategory(id.into())
    }

    pub fn toggle_subcategory(&self, id: impl Into<SubcategoryId>) -> FilterAction {
        FilterAction::ToggleSubcategory(id.into())
    }

    /// Subcategories of the selected categories, in catalog order.
    pub fn visible_subcategories(&self) -> impl Iterator<Item = &'a Subcategory> + 'a {
        let selected = self.selected_categories;
        self.categories
            .iter()
            .filter(move |c| selected.contains(&c.id))
            .flat_map(|c| c.subcategories.iter())
    }

    pub fn render(&self) -> String {
        if self.categories.is_empty() {
            return String::new();
        }

        let categories_html: String = self
            .categories
            .iter()
            .map(|category| {
                let subcategories_html: String = if self.is_selected(&category.id) {
                    category
                        .subcategories
                        .iter()
                        .map(|sub| {
                            format!(
                                r#"<label class="facet-option facet-sub">
                <input type="checkbox" name="{}" value="{}"{} data-filter-action="toggle-subcategory">
                <span class="facet-label">{}</span>
            </label>"#,
                                SUBCATEGORIES_KEY,
                                html_escape(sub.id.as_str()),
                                checked(self.is_subcategory_selected(&sub.id)),
                                html_escape(&sub.name)
                            )
                        })
                        .collect()
                } else {
                    String::new()
                };

                format!(
                    r#"<label class="facet-option">
            <input type="checkbox" name="{}" value="{}"{} data-filter-action="toggle-category">
            <span class="facet-label">{}</span>
        </label>
        {}"#,
                    CATEGORIES_KEY,
                    html_escape(category.id.as_str()),
                    checked(self.is_selected(&category.id)),
                    html_escape(&category.name),
                    subcategories_html
                )
            })
            .collect();

        format!(
            r#"<div class="facet-group" data-facet="categories">
        <h3 class="facet-title">Categories</h3>
        <div class="facet-options">
            {}
        </div>
    </div>"#,
            categories_html
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Category> {
        vec![
            Category::new("electronics", "Electronics")
                .with_subcategory("phones", "Phones")
                .with_subcategory("laptops", "Laptops"),
            Category::new("garden", "Garden").with_subcategory("tools", "Tools"),
        ]
    }

    #[test]
    fn test_toggles_emit_actions() {
        let categories = catalog();
        let picker = CategoryPicker::new(&categories, &[], &[]);
        assert_eq!(
            picker.toggle_category("garden"),
            FilterAction::ToggleCategory(CategoryId::new("garden"))
        );
        assert_eq!(
            picker.toggle_subcategory("tools"),
            FilterAction::ToggleSubcategory(SubcategoryId::new("tools"))
        );
    }

    #[test]
    fn test_subcategories_follow_selected_categories() {
        let categories = catalog();
        let selected = vec![CategoryId::new("electronics")];
        let picker = CategoryPicker::new(&categories, &selected, &[]);

        let visible: Vec<_> = picker.visible_subcategories().map(|s| s.name.as_str()).collect();
        assert_eq!(visible, vec!["Phones", "Laptops"]);

        let html = picker.render();
        assert!(html.contains("Phones"));
        assert!(!html.contains("Tools"));
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        assert_eq!(CategoryPicker::new(&[], &[], &[]).render(), "");
    }
}
