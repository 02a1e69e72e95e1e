//! Independent presentational modules.
//!
//! These replace the page's direct DOM class and attribute mutations
//! with plain view state. None of them talk to the cart; the hosting
//! document reads their state back out after each event.

pub mod gallery;
pub mod menu;
pub mod quantity;
pub mod slider;

pub use gallery::ImageGallery;
pub use menu::MobileMenu;
pub use quantity::QuantitySelector;
pub use slider::{SliderConfig, TestimonialSlider};
