//! Product Image Model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Image attached to a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(rename = "thumbnailURL", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    /// HTML fragment shown under the image in the detail view
    #[serde(rename = "imgDescription", default)]
    pub img_description: Option<String>,
}

impl ProductImage {
    /// Thumbnail path, if present and non-empty
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().filter(|p| !p.is_empty())
    }

    /// Full-size path, if present and non-empty
    pub fn full(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|p| !p.is_empty())
    }
}

/// One element of a product's image list.
///
/// The API does not guarantee that every element is an object, so anything
/// that does not decode as a [`ProductImage`] is kept as `Malformed` instead
/// of failing the whole product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Record(ProductImage),
    Malformed(Value),
}

impl ImageEntry {
    pub fn as_record(&self) -> Option<&ProductImage> {
        match self {
            ImageEntry::Record(image) => Some(image),
            ImageEntry::Malformed(_) => None,
        }
    }
}

impl From<ProductImage> for ImageEntry {
    fn from(image: ProductImage) -> Self {
        ImageEntry::Record(image)
    }
}

impl<'de> Deserialize<'de> for ImageEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(ImageEntry::Malformed(value));
        }
        match ProductImage::deserialize(&value) {
            Ok(image) => Ok(ImageEntry::Record(image)),
            Err(e) => {
                tracing::debug!("Keeping malformed image entry: {}", e);
                Ok(ImageEntry::Malformed(value))
            }
        }
    }
}
