//! Quantity stepper for the product modal.

/// Clamped quantity input.
///
/// The value never drops below 1; decrementing at 1 is a no-op, and
/// text that does not parse to a positive number reads as 1, the same
/// treatment the page gives a blank or mangled input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
}

impl QuantitySelector {
    /// Start at quantity 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 1 }
    }

    /// Current quantity.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Step the quantity up by one.
    pub const fn increase(&mut self) {
        self.value += 1;
    }

    /// Step the quantity down by one, flooring at 1.
    pub const fn decrease(&mut self) {
        if self.value > 1 {
            self.value -= 1;
        }
    }

    /// Reset to 1, as the modal does when a new product opens.
    pub const fn reset(&mut self) {
        self.value = 1;
    }

    /// Replace the value from raw input text; non-numeric or zero
    /// input reads as 1.
    pub fn set_from_text(&mut self, text: &str) {
        self.value = parse_quantity(text);
    }
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the leading digits of `text` as a quantity, defaulting to 1.
#[must_use]
pub fn parse_quantity(text: &str) -> u32 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}
