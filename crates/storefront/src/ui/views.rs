//! Cart display data and rendered fragments.
//!
//! The three controls on each rendered line are tagged with the line's
//! position in the cart's current order, so a fragment is only valid
//! until the next mutation; callers regenerate it wholesale every
//! time.

use askama::Template;
use loomcraft_core::LineItem;

/// One cart line prepared for display.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Position in the cart's current order; tags the decrement,
    /// increment, and remove controls.
    pub index: usize,
    /// Display name.
    pub name: String,
    /// Size label.
    pub size: String,
    /// Image URL.
    pub image: String,
    /// Units on this line.
    pub quantity: u32,
    /// `price * quantity`, formatted to two decimals with the currency
    /// symbol.
    pub line_price: String,
}

/// The whole cart prepared for display.
///
/// The total element lives outside this fragment and is fed separately
/// by the controller's `cart_total`.
#[derive(Debug, Clone)]
pub struct CartView {
    /// Lines in display order.
    pub items: Vec<CartItemView>,
}

impl CartView {
    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Build the view over the cart's current lines.
    #[must_use]
    pub fn from_lines(lines: &[LineItem]) -> Self {
        Self {
            items: lines
                .iter()
                .enumerate()
                .map(|(index, line)| CartItemView {
                    index,
                    name: line.name.clone(),
                    size: line.size.to_string(),
                    image: line.image.clone(),
                    quantity: line.quantity,
                    line_price: line.line_total().to_string(),
                })
                .collect(),
        }
    }
}

impl From<&[LineItem]> for CartView {
    fn from(lines: &[LineItem]) -> Self {
        Self::from_lines(lines)
    }
}

/// Cart items list fragment.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    /// Cart contents to render.
    pub cart: CartView,
}

/// Cart count badge fragment.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    /// Total units across all lines; the badge hides at zero.
    pub count: u32,
}
