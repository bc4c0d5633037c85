//! Shared types for the menu board
//!
//! Wire models for the product-listing API and the pure normalization
//! pipeline that turns them into a display-ready menu.

pub mod menu;
pub mod models;

// Re-exports
pub use menu::{CategoryFilter, MenuView, derive_view};
pub use models::{CategoryRef, ImageEntry, PricingEntry, Product, ProductImage};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
