//! Plain-text menu rendering

use menu_client::{MenuSession, MenuState};
use shared::menu::{build_image_url, category_emoji, format_price, resolve_price};
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading menu...";

/// Render the session's current view as text
pub fn render(session: &MenuSession) -> String {
    let mut out = String::new();

    match session.state() {
        MenuState::Loading => {
            let _ = writeln!(out, "{}", LOADING_MESSAGE);
            return out;
        }
        MenuState::Failed(message) => {
            let _ = writeln!(out, "{}", message);
            return out;
        }
        MenuState::Loaded(_) => {}
    }

    let view = session.view();
    for (category, items) in view.display_order() {
        if items.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{} {}", category_emoji(category), category);
        for product in items {
            let _ = writeln!(
                out,
                "  {}  {}",
                product.name,
                format_price(resolve_price(product))
            );
            if let Some(arabic) = product.arabic_description.as_deref().filter(|s| !s.is_empty()) {
                let _ = writeln!(out, "    {}", arabic);
            }
            let _ = writeln!(
                out,
                "    {}",
                build_image_url(session.media_base_url(), &product.product_images)
            );
        }
        out.push('\n');
    }

    out
}
