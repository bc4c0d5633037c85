//! Menu view derivation
//!
//! `derive_view` is recomputed from scratch whenever the product list, the
//! search term or the selected category changes. It has no hidden state.

use super::{ALL_CATEGORIES, SENTINEL_CATEGORY};
use crate::models::Product;

/// Category selection in the menu filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category name
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    /// Selector value (`"all"` or the category name)
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Products of one category, in original list order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub name: String,
    pub items: Vec<&'a Product>,
}

/// Display-ready menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView<'a> {
    /// Distinct categories of all menu items, first-seen order
    pub categories: Vec<String>,
    /// Filtered products grouped by category, first-seen order
    pub groups: Vec<CategoryGroup<'a>>,
    /// Selection the view was derived with
    pub selected: CategoryFilter,
}

impl<'a> MenuView<'a> {
    /// Items of one category (empty when the category has no surviving products)
    pub fn items(&self, category: &str) -> &[&'a Product] {
        self.groups
            .iter()
            .find(|g| g.name == category)
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }

    /// Sections in display order.
    ///
    /// With every category selected this follows [`MenuView::categories`];
    /// otherwise only the selected category is yielded, even when empty.
    pub fn display_order(&self) -> Vec<(&str, &[&'a Product])> {
        match &self.selected {
            CategoryFilter::All => self
                .categories
                .iter()
                .map(|c| (c.as_str(), self.items(c)))
                .collect(),
            CategoryFilter::Named(name) => vec![(name.as_str(), self.items(name))],
        }
    }

    /// Number of products that survived filtering
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Category name of a product, or the sentinel when it has none
pub fn resolve_category(product: &Product) -> &str {
    product.category_name().unwrap_or(SENTINEL_CATEGORY)
}

/// Whether a product matches a search term.
///
/// The term is trimmed and compared case-insensitively against the name and
/// both descriptions. A blank term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    contains_term(Some(&product.name), &term)
        || contains_term(product.arabic_description.as_ref(), &term)
        || contains_term(product.other_description.as_ref(), &term)
}

fn contains_term(field: Option<&String>, term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(term))
}

/// Distinct categories of the menu items, in first-seen order
pub fn visible_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products.iter().filter(|p| p.is_menu_item) {
        let name = resolve_category(product);
        if !categories.iter().any(|c| c == name) {
            categories.push(name.to_string());
        }
    }
    categories
}

/// Derive the menu view for the current search term and category selection
pub fn derive_view<'a>(
    products: &'a [Product],
    search_term: &str,
    selected: &CategoryFilter,
) -> MenuView<'a> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    let survivors = products.iter().filter(|p| {
        p.is_menu_item && selected.matches(resolve_category(p)) && matches_search(p, search_term)
    });

    for product in survivors {
        let name = resolve_category(product);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.items.push(product),
            None => groups.push(CategoryGroup {
                name: name.to_string(),
                items: vec![product],
            }),
        }
    }

    MenuView {
        categories: visible_categories(products),
        groups,
        selected: selected.clone(),
    }
}

/// Entry of the category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub label: String,
    pub value: String,
}

/// Selector options: "All categories" followed by each category
pub fn category_options(categories: &[String]) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        label: "All categories".to_string(),
        value: ALL_CATEGORIES.to_string(),
    })
    .chain(categories.iter().map(|c| CategoryOption {
        label: c.clone(),
        value: c.clone(),
    }))
    .collect()
}

/// Emoji shown next to a category name
pub fn category_emoji(name: &str) -> &'static str {
    let name = name.to_lowercase();
    if name.contains("soup") {
        "🥣"
    } else if name.contains("salad") {
        "🥗"
    } else if name.contains("grill") {
        "🔥"
    } else if name.contains("dessert") {
        "🍮"
    } else if name.contains("drink") || name.contains("juice") {
        "🍹"
    } else if name.contains("seafood") {
        "🦞"
    } else {
        "🍽️"
    }
}
