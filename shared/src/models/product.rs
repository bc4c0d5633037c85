//! Product Model

use super::{ImageEntry, lenient_decimal, null_as_default, truthy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product record as returned by the product-listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub arabic_description: Option<String>,
    #[serde(default)]
    pub other_description: Option<String>,
    /// Category reference (may be absent)
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Per-section pricing entries
    #[serde(default, deserialize_with = "null_as_default")]
    pub section_wise_product_detail_list: Vec<PricingEntry>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub base_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub cost: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_images: Vec<ImageEntry>,
    /// Whether the product is shown on the public menu
    #[serde(default, deserialize_with = "truthy")]
    pub is_menu_item: bool,
}

/// Category reference embedded in a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Pricing entry (one per menu section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEntry {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "truthy")]
    pub is_active: bool,
}

impl Product {
    /// Category name, or `None` when the reference or its name is missing/empty
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}
