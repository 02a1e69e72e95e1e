//! Integration tests for Loomcraft.
//!
//! The tests in `tests/` exercise the storefront crate the way the
//! hosting page does: hydrate from storage, mutate through events,
//! and reload from the same storage to simulate a fresh page visit.
//!
//! # Test Categories
//!
//! - `cart_roundtrip` - Persistence round trips across page loads
//! - `page_scenarios` - Full click-path scenarios through the page
//!   controller

#![cfg_attr(not(test), forbid(unsafe_code))]

use loomcraft_core::{LineItem, Price, ProductId, Size};
use rust_decimal::Decimal;

/// Build a line item with the given identity pair and quantity.
#[must_use]
pub fn line_item(id: &str, size: &str, price: Decimal, quantity: u32, name: &str) -> LineItem {
    LineItem {
        id: ProductId::from(id),
        name: name.to_string(),
        price: Price::new(price),
        quantity,
        image: format!("{id}.jpg"),
        size: Size::from(size),
    }
}
