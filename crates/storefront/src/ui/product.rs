//! Deriving a candidate line item from page state.

use loomcraft_core::{LineItem, Price, ProductId, Size};
use rust_decimal::{Decimal, RoundingStrategy, dec};

use crate::page::quantity::parse_quantity;

/// A product card in the listing grid, as the page displays it.
///
/// Prices are the card's display text, dollar signs and all; the
/// numeric values get extracted on demand.
#[derive(Debug, Clone)]
pub struct ProductCard {
    /// Product identity from the markup, when the card carries one.
    pub id: Option<ProductId>,
    /// Display name.
    pub name: String,
    /// Discounted price text, e.g. `"$89.00"`.
    pub discount_price_text: String,
    /// Original price text, e.g. `"$120.00"`.
    pub original_price_text: String,
    /// Card image URL.
    pub image: String,
}

/// One entry in the modal's size selector.
#[derive(Debug, Clone)]
pub struct SizeOption {
    /// Selector label ("S", "M", ...).
    pub label: String,
    /// Whether this option is currently checked.
    pub checked: bool,
}

/// The product-detail modal's visible state.
///
/// Every field is optional because the page treats a missing element
/// as a defaulted value, never as a failure.
#[derive(Debug, Clone)]
pub struct ProductModal {
    /// Product identity carried over from the card.
    pub product_id: Option<ProductId>,
    /// Heading text.
    pub name: Option<String>,
    /// Current-price display text, e.g. `"After Discount: $89.00"`.
    pub price_text: Option<String>,
    /// Original-price display text.
    pub original_price_text: Option<String>,
    /// Discount badge text.
    pub discount_text: Option<String>,
    /// Main product image URL.
    pub image: Option<String>,
    /// Size selector entries.
    pub size_options: Vec<SizeOption>,
    /// Raw quantity input text.
    pub quantity_text: Option<String>,
}

impl ProductModal {
    /// Populate the modal from a clicked product card.
    ///
    /// Computes the discount percentage from the card's two price
    /// texts and resets the quantity input to 1. Cards without an
    /// identity get a generated one so distinct anonymous products
    /// never merge in the cart.
    #[must_use]
    pub fn from_card(card: &ProductCard, size_options: Vec<SizeOption>) -> Self {
        let price = Price::from_display_text(&card.discount_price_text);
        let original = Price::from_display_text(&card.original_price_text);
        let discount = discount_percent(original, price);

        Self {
            product_id: Some(card.id.clone().unwrap_or_else(ProductId::generate)),
            name: Some(card.name.clone()),
            price_text: Some(format!("After Discount: {price}")),
            original_price_text: Some(format!("Original: {original}")),
            discount_text: Some(format!("Discount: {discount}%")),
            image: Some(card.image.clone()),
            size_options,
            quantity_text: Some("1".to_string()),
        }
    }

    /// Derive the candidate line item from the modal's visible state.
    ///
    /// Price is parsed out of the displayed price text; quantity
    /// defaults to 1 when the input is absent or non-numeric; size
    /// defaults to `"M"` when no option is checked.
    #[must_use]
    pub fn product(&self) -> LineItem {
        LineItem {
            id: self.product_id.clone().unwrap_or_else(ProductId::generate),
            name: self.name.clone().unwrap_or_else(|| "Product".to_string()),
            price: self
                .price_text
                .as_deref()
                .map_or(Price::ZERO, Price::from_display_text),
            quantity: self.quantity_text.as_deref().map_or(1, parse_quantity),
            image: self.image.clone().unwrap_or_default(),
            size: self
                .size_options
                .iter()
                .find(|opt| opt.checked)
                .map_or_else(Size::default, |opt| Size::from(opt.label.as_str())),
        }
    }
}

/// Percentage saved between an original and a discounted price,
/// rounded to the nearest whole percent. A zero original price yields
/// zero rather than dividing by it.
#[must_use]
pub fn discount_percent(original: Price, discounted: Price) -> Decimal {
    if original.amount().is_zero() {
        return Decimal::ZERO;
    }
    ((original.amount() - discounted.amount()) / original.amount() * dec!(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
