//! Cart line items.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId, Size};

/// One distinguishable product selection in the cart.
///
/// Field order matches the persisted payload layout: `id`, `name`,
/// `price`, `quantity`, `image`, `size`. The payload carries no schema
/// version; format changes are not backward-compatible.
///
/// Line identity is the (`id`, `size`) pair - see
/// [`LineItem::same_line`]. The cart guarantees no two lines share a
/// pair and that quantities stay >= 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identity.
    pub id: ProductId,
    /// Display label.
    pub name: String,
    /// Unit price captured at the time of add.
    pub price: Price,
    /// Units of this selection, always >= 1 inside the cart.
    pub quantity: u32,
    /// Display image URL.
    pub image: String,
    /// Selected size variant.
    pub size: Size,
}

impl LineItem {
    /// Whether `other` is the same cart line, i.e. shares this line's
    /// (`id`, `size`) identity pair.
    #[must_use]
    pub fn same_line(&self, other: &Self) -> bool {
        self.id == other.id && self.size == other.size
    }

    /// Price of the whole line: `price * quantity`, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.quantity)
    }
}
