//! Product derivation and cart rendering.
//!
//! Translates page state (a clicked product card, the open product
//! modal) into candidate [`loomcraft_core::LineItem`]s, and the cart's
//! sequence into rendered fragments with position-tagged controls.

pub mod product;
pub mod views;

pub use product::{ProductCard, ProductModal, SizeOption};
pub use views::{CartCountTemplate, CartItemView, CartItemsTemplate, CartView};
