//! Menu normalization and filtering
//!
//! Turns the raw product list into display-ready data:
//! - price resolution with the section → base → cost → zero fallback
//! - image URL resolution against the media base URL
//! - category enumeration, search/category filtering and grouping
//! - detail-view carousel state

pub mod carousel;
pub mod filter;
pub mod image;
pub mod price;

pub use carousel::{Carousel, SwipeDirection, SWIPE_THRESHOLD};
pub use filter::{
    CategoryFilter, CategoryGroup, CategoryOption, MenuView, category_emoji, category_options,
    derive_view, matches_search, resolve_category, visible_categories,
};
pub use image::{build_full, build_image_url, build_thumb, resolve_path};
pub use price::{format_price, resolve_price};

/// Category label for products without a category
pub const SENTINEL_CATEGORY: &str = "Chef Specials";

/// Selector value meaning "every category"
pub const ALL_CATEGORIES: &str = "all";

/// Fallback image used whenever no product image can be resolved
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1466978913421-dad2ebd01d17?auto=format&fit=crop&w=400&q=60";
