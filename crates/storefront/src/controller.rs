//! Page wiring: the object graph built once at page load.
//!
//! Owns the cart and the presentational modules and exposes the
//! click-event entry points the hosting document forwards to. Every
//! cart mutation returns the freshly rendered items fragment, because
//! the rendered controls are tagged by position and go stale the
//! moment the sequence changes.

use crate::cart::Cart;
use crate::config::PageConfig;
use crate::notify::NoticeSink;
use crate::page::{ImageGallery, MobileMenu, QuantitySelector, TestimonialSlider};
use crate::storage::StorageAdapter;
use crate::ui::views::{CartCountTemplate, CartItemsTemplate, CartView};
use crate::ui::{ProductCard, ProductModal, SizeOption};

/// One product page's worth of state.
///
/// Constructed once at startup; thereafter everything happens inside
/// synchronous event-handler calls on the hosting thread.
pub struct Page<S: StorageAdapter> {
    cart: Cart<S>,
    config: PageConfig,
    modal: Option<ProductModal>,
    cart_open: bool,
    /// Mobile navigation state.
    pub menu: MobileMenu,
    /// Product image gallery.
    pub gallery: ImageGallery,
    /// Modal quantity stepper.
    pub quantity: QuantitySelector,
    /// Testimonial carousel handle.
    pub slider: TestimonialSlider,
}

impl<S: StorageAdapter> Page<S> {
    /// Initialize every module, hydrating the cart from storage.
    #[must_use]
    pub fn new(storage: S, config: PageConfig) -> Self {
        let cart = Cart::hydrate(storage, &config);
        let slider = TestimonialSlider::new(config.slider.clone());

        Self {
            cart,
            config,
            modal: None,
            cart_open: false,
            menu: MobileMenu::new(),
            gallery: ImageGallery::default(),
            quantity: QuantitySelector::new(),
            slider,
        }
    }

    /// Route cart notices to `sink`, builder style.
    #[must_use]
    pub fn with_sink(mut self, sink: impl NoticeSink + 'static) -> Self {
        self.cart = self.cart.with_sink(sink);
        self
    }

    /// Read access to the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart<S> {
        &self.cart
    }

    /// The open product modal, if any.
    #[must_use]
    pub const fn modal(&self) -> Option<&ProductModal> {
        self.modal.as_ref()
    }

    // =========================================================================
    // Product modal
    // =========================================================================

    /// A product card was clicked: populate and open the modal, point
    /// the gallery at the card's image, and reset the quantity input.
    pub fn open_product(&mut self, card: &ProductCard) {
        let size_options = self
            .config
            .size_labels
            .iter()
            .map(|label| SizeOption {
                label: label.clone(),
                checked: false,
            })
            .collect();

        self.gallery.set_main_image(&card.image);
        self.quantity.reset();
        self.modal = Some(ProductModal::from_card(card, size_options));
    }

    /// Check one size option in the open modal, unchecking the rest.
    pub fn select_size(&mut self, label: &str) {
        if let Some(modal) = &mut self.modal {
            for opt in &mut modal.size_options {
                opt.checked = opt.label == label;
            }
        }
    }

    /// The modal's add-to-cart button: derive the candidate line from
    /// the modal and the quantity stepper, add it, close the modal,
    /// and return the re-rendered items fragment.
    pub fn add_from_modal(&mut self) -> String {
        if let Some(modal) = &mut self.modal {
            modal.quantity_text = Some(self.quantity.value().to_string());
            let item = modal.product();
            self.cart.add(item);
            self.modal = None;
        }
        self.render_cart_items()
    }

    // =========================================================================
    // Cart panel
    // =========================================================================

    /// The cart icon was clicked: show the panel and render its
    /// contents.
    pub fn open_cart(&mut self) -> String {
        self.cart_open = true;
        self.render_cart_items()
    }

    /// Hide the cart panel.
    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Whether the cart panel is shown.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Increment control on the line at `index`.
    pub fn increment(&mut self, index: usize) -> String {
        if let Some(line) = self.cart.get(index) {
            let quantity = line.quantity;
            self.cart.update_quantity(index, quantity.saturating_add(1));
        }
        self.render_cart_items()
    }

    /// Decrement control on the line at `index`.
    ///
    /// At quantity 1 the line is removed outright; the cart itself
    /// rejects a zero quantity.
    pub fn decrement(&mut self, index: usize) -> String {
        if let Some(line) = self.cart.get(index) {
            let quantity = line.quantity;
            if quantity > 1 {
                self.cart.update_quantity(index, quantity - 1);
            } else {
                self.cart.remove(index);
            }
        }
        self.render_cart_items()
    }

    /// Remove control on the line at `index`.
    pub fn remove(&mut self, index: usize) -> String {
        self.cart.remove(index);
        self.render_cart_items()
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> String {
        self.cart.clear();
        self.render_cart_items()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the cart items fragment for the current sequence.
    #[must_use]
    pub fn render_cart_items(&self) -> String {
        let template = CartItemsTemplate {
            cart: CartView::from_lines(&self.cart.items()),
        };
        render_or_empty(&template, "cart items")
    }

    /// Render the cart count badge.
    #[must_use]
    pub fn render_cart_count(&self) -> String {
        let template = CartCountTemplate {
            count: self.cart.total_quantity(),
        };
        render_or_empty(&template, "cart count")
    }

    /// Cart total to two decimals for the total element, no currency
    /// symbol.
    #[must_use]
    pub fn cart_total(&self) -> String {
        format!("{:.2}", self.cart.total().amount())
    }
}

/// Render a fragment, degrading to an empty string with a logged
/// diagnostic; the page has no error surface.
fn render_or_empty<T: askama::Template>(template: &T, what: &str) -> String {
    template.render().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to render {what} fragment");
        String::new()
    })
}
