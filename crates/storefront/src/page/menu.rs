//! Mobile navigation menu toggle.

/// Open/closed state of the slide-in mobile menu.
///
/// The open button opens it, the close button closes it, and following
/// any nav link closes it as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Menu starts closed.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Open the menu.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Close the menu.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// A nav link was followed; the menu closes.
    pub const fn follow_nav_link(&mut self) {
        self.open = false;
    }

    /// Whether the menu is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}
