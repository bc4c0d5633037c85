//! Image URL resolution
//!
//! Paths starting with `http` are used as-is; anything else is appended to
//! the media base URL by plain string concatenation.

use super::PLACEHOLDER_IMAGE;
use crate::models::ImageEntry;

/// Resolve a media path against the base URL
pub fn resolve_path(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

/// Representative thumbnail for a product card.
///
/// Picks the first entry with a thumbnail, else the first entry with a
/// full-size image, else the placeholder.
pub fn build_image_url(base_url: &str, images: &[ImageEntry]) -> String {
    let records = || images.iter().filter_map(ImageEntry::as_record);

    records()
        .find_map(|image| image.thumbnail())
        .or_else(|| records().find_map(|image| image.full()))
        .map(|path| resolve_path(base_url, path))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Thumbnail for one image in the detail view's thumbnail strip
pub fn build_thumb(base_url: &str, image: &ImageEntry) -> String {
    image
        .as_record()
        .and_then(|record| record.thumbnail().or_else(|| record.full()))
        .map(|path| resolve_path(base_url, path))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Full-size image for the detail view carousel
pub fn build_full(base_url: &str, image: &ImageEntry) -> String {
    image
        .as_record()
        .and_then(|record| record.full())
        .map(|path| resolve_path(base_url, path))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}
