//! Detail-view carousel
//!
//! Tracks the open product and the current slide over its images. Opening a
//! product resets to the first slide; navigation wraps at both ends.

use super::image::{build_full, build_thumb};
use crate::models::Product;

/// Minimum horizontal travel for a touch gesture to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Previous,
    Next,
}

impl SwipeDirection {
    /// Direction for a gesture from `start_x` to `end_x`, if it is long enough
    pub fn from_gesture(start_x: f32, end_x: f32) -> Option<Self> {
        let diff = end_x - start_x;
        if diff > SWIPE_THRESHOLD {
            Some(SwipeDirection::Previous)
        } else if diff < -SWIPE_THRESHOLD {
            Some(SwipeDirection::Next)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    active: Option<Product>,
    slide_index: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, product: Product) {
        self.active = Some(product);
        self.slide_index = 0;
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Product> {
        self.active.as_ref()
    }

    fn image_count(&self) -> usize {
        self.active.as_ref().map_or(0, |p| p.product_images.len())
    }

    pub fn next(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        self.slide_index = if self.slide_index + 1 >= count { 0 } else { self.slide_index + 1 };
    }

    pub fn prev(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        self.slide_index = if self.slide_index == 0 { count - 1 } else { self.slide_index - 1 };
    }

    /// Jump to a slide (thumbnail click)
    pub fn select(&mut self, index: usize) {
        if self.active.is_some() {
            self.slide_index = index;
        }
    }

    pub fn swipe(&mut self, start_x: f32, end_x: f32) {
        match SwipeDirection::from_gesture(start_x, end_x) {
            Some(SwipeDirection::Previous) => self.prev(),
            Some(SwipeDirection::Next) => self.next(),
            None => {}
        }
    }

    /// Current slide, clamped into the image list
    pub fn safe_index(&self) -> usize {
        self.slide_index.min(self.image_count().saturating_sub(1))
    }

    /// Full-size URL of the current slide, if the product has images
    pub fn current_image(&self, base_url: &str) -> Option<String> {
        let product = self.active.as_ref()?;
        product
            .product_images
            .get(self.safe_index())
            .map(|image| build_full(base_url, image))
    }

    /// HTML description of the current slide
    pub fn current_description(&self) -> Option<&str> {
        self.active
            .as_ref()?
            .product_images
            .get(self.safe_index())?
            .as_record()?
            .img_description
            .as_deref()
            .filter(|html| !html.is_empty())
    }

    /// Thumbnail strip, with the active flag set on the current slide
    pub fn thumbnails(&self, base_url: &str) -> Vec<(String, bool)> {
        let Some(product) = self.active.as_ref() else {
            return Vec::new();
        };
        let current = self.safe_index();
        product
            .product_images
            .iter()
            .enumerate()
            .map(|(i, image)| (build_thumb(base_url, image), i == current))
            .collect()
    }
}
