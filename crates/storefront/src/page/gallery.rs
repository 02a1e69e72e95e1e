//! Product image gallery with thumbnail switching.

/// Main product image plus its thumbnail strip.
///
/// Clicking a thumbnail swaps it into the main image slot and marks it
/// active. Requests for thumbnails that do not exist are ignored, the
/// way the page ignores clicks with no matching element.
#[derive(Debug, Clone, Default)]
pub struct ImageGallery {
    thumbnails: Vec<String>,
    main_image: String,
    active: Option<usize>,
}

impl ImageGallery {
    /// Create a gallery over a thumbnail strip. The first thumbnail,
    /// if any, starts as the main image.
    #[must_use]
    pub fn new(thumbnails: Vec<String>) -> Self {
        let main_image = thumbnails.first().cloned().unwrap_or_default();
        let active = if thumbnails.is_empty() { None } else { Some(0) };
        Self {
            thumbnails,
            main_image,
            active,
        }
    }

    /// Swap the thumbnail at `index` into the main image slot.
    pub fn change_image(&mut self, index: usize) {
        let Some(url) = self.thumbnails.get(index) else {
            return;
        };
        self.main_image = url.clone();
        self.active = Some(index);
    }

    /// Replace the main image directly, activating the matching
    /// thumbnail when one exists. Used when a product card opens the
    /// modal with its own image.
    pub fn set_main_image(&mut self, url: &str) {
        self.main_image = url.to_string();
        self.active = self.thumbnails.iter().position(|thumb| thumb == url);
    }

    /// URL currently shown in the main slot.
    #[must_use]
    pub fn main_image(&self) -> &str {
        &self.main_image
    }

    /// Index of the active thumbnail, if the main image came from the
    /// strip.
    #[must_use]
    pub const fn active_thumbnail(&self) -> Option<usize> {
        self.active
    }

    /// The thumbnail strip.
    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        &self.thumbnails
    }
}
