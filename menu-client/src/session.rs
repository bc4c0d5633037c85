//! Menu session
//!
//! Owns the fetched product list and the user's filter state. The session
//! starts in `Loading`, settles exactly once into `Loaded` or `Failed` after
//! the single fetch attempt, and never goes back to `Loading`.

use crate::error::LOAD_FAILED_MESSAGE;
use crate::products::ProductSource;
use shared::menu::{Carousel, CategoryOption, category_options, visible_categories};
use shared::{CategoryFilter, MenuView, Product, derive_view};

/// Lifecycle of the menu fetch
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
    Loading,
    /// Menu items of the fetched catalog
    Loaded(Vec<Product>),
    /// User-facing failure message
    Failed(String),
}

impl MenuState {
    pub fn is_loading(&self) -> bool {
        matches!(self, MenuState::Loading)
    }
}

#[derive(Debug, Clone)]
pub struct MenuSession {
    state: MenuState,
    media_base_url: String,
    search_term: String,
    selected: CategoryFilter,
    carousel: Carousel,
}

impl MenuSession {
    /// Create a session; `media_base_url` prefixes relative image paths
    pub fn new(media_base_url: impl Into<String>) -> Self {
        Self {
            state: MenuState::Loading,
            media_base_url: media_base_url.into(),
            search_term: String::new(),
            selected: CategoryFilter::All,
            carousel: Carousel::new(),
        }
    }

    /// Run the single fetch attempt. Later calls leave the settled state as is.
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) -> &MenuState {
        if !self.state.is_loading() {
            tracing::debug!("Menu already settled, skipping fetch");
            return &self.state;
        }

        self.state = match source.fetch_products().await {
            Ok(products) => {
                let total = products.len();
                let items: Vec<Product> = products.into_iter().filter(|p| p.is_menu_item).collect();
                tracing::info!("Loaded {} menu items ({} products)", items.len(), total);
                MenuState::Loaded(items)
            }
            Err(e) => {
                tracing::warn!("Failed to load menu: {}", e);
                MenuState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        &self.state
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            MenuState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Menu items (empty while loading or after a failure)
    pub fn products(&self) -> &[Product] {
        match &self.state {
            MenuState::Loaded(products) => products,
            _ => &[],
        }
    }

    pub fn media_base_url(&self) -> &str {
        &self.media_base_url
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn select_category(&mut self, category: impl Into<CategoryFilter>) {
        self.selected = category.into();
    }

    pub fn categories(&self) -> Vec<String> {
        visible_categories(self.products())
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        category_options(&self.categories())
    }

    /// Current display-ready view
    pub fn view(&self) -> MenuView<'_> {
        derive_view(self.products(), &self.search_term, &self.selected)
    }

    /// Open the detail view for a product; returns false for an unknown id
    pub fn open_product(&mut self, guid: &str) -> bool {
        let Some(product) = self.products().iter().find(|p| p.guid == guid).cloned() else {
            return false;
        };
        self.carousel.open(product);
        true
    }

    pub fn close_product(&mut self) {
        self.carousel.close();
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }
}
