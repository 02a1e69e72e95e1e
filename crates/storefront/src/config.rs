//! Page configuration.
//!
//! There is no environment to load from: the hosting page bakes these
//! values in. [`PageConfig::default`] reproduces the shipped page.

use std::time::Duration;

use crate::page::slider::SliderConfig;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "shoppingCart";

/// Configuration for one product page.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Key under which the cart persists its line items.
    pub storage_key: String,
    /// How long a notice toast stays visible.
    pub toast_duration: Duration,
    /// Labels in the modal's size selector, none checked initially.
    pub size_labels: Vec<String>,
    /// Testimonial slider settings.
    pub slider: SliderConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            toast_duration: Duration::from_secs(3),
            size_labels: ["S", "M", "L", "XL"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            slider: SliderConfig::default(),
        }
    }
}
