//! Transient cart notifications.
//!
//! Notices are the toast messages the page flashes after a cart
//! mutation ("Shirt added to cart!"). They are purely cosmetic: cart
//! state is correct whether or not anything displays them. The cart
//! pushes notices into a [`NoticeSink`] so the rendering layer can
//! react without the cart knowing anything about the document.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A single toast message with its display lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text to display.
    pub message: String,
    /// How long the toast stays up before fading out.
    pub dismiss_after: Duration,
}

/// Receiver for cart notices.
pub trait NoticeSink {
    /// Accept one notice for display.
    fn push(&mut self, notice: Notice);
}

/// Sink that drops every notice. The default for carts whose host has
/// no toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NoticeSink for NullSink {
    fn push(&mut self, _notice: Notice) {}
}

/// Cloneable sink collecting notices into shared storage.
///
/// Hand one clone to the cart and keep another to read what was
/// emitted.
#[derive(Debug, Clone, Default)]
pub struct SharedSink {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl SharedSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every notice collected so far, leaving the sink empty.
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }

    /// Message texts collected so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl NoticeSink for SharedSink {
    fn push(&mut self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
