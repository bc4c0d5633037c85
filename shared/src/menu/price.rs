//! Price resolution
//!
//! A product's display price comes from the first active section entry with a
//! positive price. Without one, the base price is used, then the cost, then
//! zero. A zero or missing value falls through to the next step.

use crate::models::Product;
use rust_decimal::prelude::*;

/// Currency shown next to every price
const CURRENCY: &str = "SAR";

/// Rounding for displayed prices (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Resolve the display price of a product
pub fn resolve_price(product: &Product) -> Decimal {
    let section_price = product
        .section_wise_product_detail_list
        .iter()
        .find(|entry| entry.is_active && entry.price.is_some_and(|p| p > Decimal::ZERO))
        .and_then(|entry| entry.price);

    [section_price, product.base_price, product.cost]
        .into_iter()
        .flatten()
        .find(|price| !price.is_zero())
        .unwrap_or(Decimal::ZERO)
}

/// Format a price for display, e.g. `SAR 1,234.50` or `-SAR 5.00`
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{}{} {}.{}", sign, CURRENCY, group_thousands(whole), fraction)
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
